use std::path::Path;

use anyhow::Result;
use sha2::{Digest, Sha256};

use quinegen_core::verify::{self, VerifyReport};
use quinegen_core::Expander;

use crate::output;

/// Check that expanding a skeleton reproduces a source file byte for byte.
///
/// Prints a formatted report (or JSON with `--json`) including SHA-256
/// digests of both byte sequences, and exits nonzero on mismatch.
pub fn run(skeleton_path: &Path, source_path: &Path, json: bool, expander: &Expander) -> Result<()> {
    let skeleton = super::read_input(skeleton_path)?;
    let source = super::read_input(source_path)?;

    let report = verify::verify(&skeleton, &source, expander);
    let expanded = expander.expand(&skeleton);
    let sha_expanded = hex::encode(Sha256::digest(&expanded));
    let sha_source = hex::encode(Sha256::digest(&source));

    if json {
        print_json(&report, &sha_expanded, &sha_source)?;
    } else {
        print_text(
            skeleton_path,
            source_path,
            &report,
            &expanded,
            &source,
            &sha_expanded,
            &sha_source,
        );
    }

    report.into_result()?;
    Ok(())
}

fn print_json(report: &VerifyReport, sha_expanded: &str, sha_source: &str) -> Result<()> {
    let doc = serde_json::json!({
        "report": report,
        "sha256": {
            "expanded": sha_expanded,
            "source": sha_source,
        },
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn print_text(
    skeleton_path: &Path,
    source_path: &Path,
    report: &VerifyReport,
    expanded: &[u8],
    source: &[u8],
    sha_expanded: &str,
    sha_source: &str,
) {
    output::print_header("quinegen verify");
    output::print_key_value("Skeleton", &skeleton_path.display().to_string());
    output::print_key_value("Source", &source_path.display().to_string());
    output::print_key_value("Expanded size", &format!("{} bytes", report.expanded_len));
    output::print_key_value("Source size", &format!("{} bytes", report.source_len));
    output::print_key_value("SHA-256 (expanded)", sha_expanded);
    output::print_key_value("SHA-256 (source)", sha_source);

    match report.first_mismatch {
        None => output::print_success("Round trip holds: expansion reproduces the source exactly"),
        Some(offset) => {
            output::print_error(&format!("Expansion diverges from source at byte {offset}"));
            output::print_byte_context("expanded", expanded, offset);
            output::print_byte_context("source", source, offset);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quinegen_core::fixpoint::solve;
    use quinegen_core::templates::embedded::RUST_SKELETON;

    #[test]
    fn test_verify_solved_pair_ok() {
        let dir = tempfile::tempdir().unwrap();
        let expander = Expander::default();
        let solution = solve(RUST_SKELETON.as_bytes(), &expander).unwrap();

        let skel_path = dir.path().join("quine.rs.tmpl");
        let src_path = dir.path().join("quine.rs");
        std::fs::write(&skel_path, &solution.template).unwrap();
        std::fs::write(&src_path, &solution.source).unwrap();

        run(&skel_path, &src_path, false, &expander).unwrap();
        run(&skel_path, &src_path, true, &expander).unwrap();
    }

    #[test]
    fn test_verify_edited_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let expander = Expander::default();
        let solution = solve(RUST_SKELETON.as_bytes(), &expander).unwrap();

        let skel_path = dir.path().join("quine.rs.tmpl");
        let src_path = dir.path().join("quine.rs");
        std::fs::write(&skel_path, &solution.template).unwrap();
        let mut edited = solution.source.clone();
        edited.push(b'\n');
        std::fs::write(&src_path, &edited).unwrap();

        let err = run(&skel_path, &src_path, false, &expander).unwrap_err();
        assert!(err.to_string().contains("mismatch"));
    }
}
