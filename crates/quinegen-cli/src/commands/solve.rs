use std::path::{Path, PathBuf};

use anyhow::Result;

use quinegen_core::fixpoint;
use quinegen_core::verify::verify;
use quinegen_core::Expander;

use crate::output;

/// Run the fixed-point pass on a skeleton file and write the finished source.
///
/// The default output path strips a `.tmpl` extension from the skeleton path;
/// without one, `.out` is appended instead (never overwrite the input).
/// The freshly written source is re-verified against the skeleton before
/// reporting success.
pub fn run(skeleton_path: &Path, output_path: Option<&Path>, expander: &Expander) -> Result<()> {
    output::print_header("quinegen solve");

    let skeleton = super::read_input(skeleton_path)?;
    output::print_key_value("Skeleton", &skeleton_path.display().to_string());
    output::print_key_value("Size", &format!("{} bytes", skeleton.len()));

    output::print_step(1, 2, "Running fixed-point expansion...");
    let solution = fixpoint::solve(&skeleton, expander)?;

    let out_path = match output_path {
        Some(p) => p.to_path_buf(),
        None => default_output_path(skeleton_path),
    };

    output::print_step(2, 2, "Verifying round-trip...");
    verify(&solution.template, &solution.source, expander).into_result()?;

    std::fs::write(&out_path, &solution.source)?;

    output::print_success("Solved");
    output::print_key_value("Source", &out_path.display().to_string());
    output::print_key_value("Size", &format!("{} bytes", solution.source.len()));
    Ok(())
}

fn default_output_path(skeleton_path: &Path) -> PathBuf {
    if skeleton_path.extension().is_some_and(|e| e == "tmpl") {
        skeleton_path.with_extension("")
    } else {
        let mut os = skeleton_path.as_os_str().to_os_string();
        os.push(".out");
        PathBuf::from(os)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_strips_tmpl() {
        assert_eq!(
            default_output_path(Path::new("demo/quine.rs.tmpl")),
            PathBuf::from("demo/quine.rs")
        );
    }

    #[test]
    fn test_default_output_appends_out() {
        assert_eq!(
            default_output_path(Path::new("skeleton.txt")),
            PathBuf::from("skeleton.txt.out")
        );
    }

    #[test]
    fn test_run_writes_fixed_point() {
        let dir = tempfile::tempdir().unwrap();
        let skel_path = dir.path().join("quine.py.tmpl");
        std::fs::write(
            &skel_path,
            quinegen_core::templates::embedded::PYTHON_SKELETON,
        )
        .unwrap();

        run(&skel_path, None, &Expander::default()).unwrap();

        let source = std::fs::read(dir.path().join("quine.py")).unwrap();
        let expected = Expander::default()
            .expand(quinegen_core::templates::embedded::PYTHON_SKELETON.as_bytes());
        assert_eq!(source, expected);
    }

    #[test]
    fn test_run_missing_skeleton_fails() {
        let err = run(
            Path::new("/nonexistent/skeleton.tmpl"),
            None,
            &Expander::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("skeleton.tmpl"));
    }
}
