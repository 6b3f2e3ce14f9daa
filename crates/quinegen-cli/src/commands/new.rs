use std::path::Path;

use anyhow::Result;
use dialoguer::Select;

use quinegen_core::fixpoint;
use quinegen_core::Expander;

use crate::output;
use crate::LangChoice;

/// Scaffold a new quine project directory.
///
/// Writes the embedded skeleton for the chosen language, solves it, and
/// writes the finished self-reproducing source next to it. If no language
/// is specified, prompts interactively.
pub fn run(name: &str, lang: Option<LangChoice>, force: bool) -> Result<()> {
    output::print_header(&format!("quinegen new: {name}"));

    // Select language (interactive if not provided)
    let lang = match lang {
        Some(l) => l,
        None => {
            let choices = [LangChoice::Cpp, LangChoice::Rust, LangChoice::Python];
            let descriptions = &[
                "C++ — single translation unit, compile with g++ -std=c++17",
                "Rust — single file, compile with plain rustc",
                "Python — run directly with python3",
            ];

            let selection = Select::new()
                .with_prompt("Select target language")
                .items(descriptions)
                .default(0)
                .interact()?;

            choices[selection]
        }
    };

    let project_dir = Path::new(name);
    if project_dir.exists() && !force {
        anyhow::bail!(
            "directory '{name}' already exists (use --force to overwrite its files)"
        );
    }
    if project_dir.exists() {
        output::print_warning(&format!("reusing existing directory '{name}'"));
    }

    output::print_step(1, 3, &format!("Creating project directory: {name}/"));
    std::fs::create_dir_all(project_dir)?;

    output::print_step(2, 3, &format!("Writing {} skeleton", lang.as_str()));
    let skeleton = lang.skeleton();
    let skeleton_file = format!("{}.tmpl", lang.source_file());
    std::fs::write(project_dir.join(&skeleton_file), skeleton)?;

    output::print_step(3, 3, "Solving fixed point");
    tracing::debug!(lang = lang.as_str(), skeleton_len = skeleton.len(), "solving skeleton");
    let solution = fixpoint::solve(skeleton.as_bytes(), &Expander::default())?;
    let source_path = project_dir.join(lang.source_file());
    std::fs::write(&source_path, &solution.source)?;

    output::print_success(&format!(
        "Project '{name}' created with a {} quine",
        lang.as_str()
    ));
    output::print_key_value("Skeleton", &format!("{name}/{skeleton_file}"));
    output::print_key_value(
        "Source",
        &format!("{name}/{} ({} bytes)", lang.source_file(), solution.source.len()),
    );
    println!();
    println!("  Next steps:");
    println!("    cd {name}");
    match lang {
        LangChoice::Cpp => {
            println!("    g++ -std=c++17 -o quine quine.cpp");
            println!("    ./quine | cmp - quine.cpp");
        }
        LangChoice::Rust => {
            println!("    rustc -o quine quine.rs");
            println!("    ./quine | cmp - quine.rs");
        }
        LangChoice::Python => {
            println!("    python3 quine.py | cmp - quine.py");
        }
    }
    println!();
    println!("  After editing the skeleton, regenerate with:");
    println!("    quinegen solve {skeleton_file}");
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quinegen_core::verify::verify;

    #[test]
    fn test_new_scaffolds_solved_quine() {
        let dir = tempfile::tempdir().unwrap();
        let name = dir.path().join("demo");
        let name = name.to_str().unwrap();

        run(name, Some(LangChoice::Python), false).unwrap();

        let skeleton = std::fs::read(format!("{name}/quine.py.tmpl")).unwrap();
        let source = std::fs::read(format!("{name}/quine.py")).unwrap();
        assert!(verify(&skeleton, &source, &Expander::default()).matched);
    }

    #[test]
    fn test_new_refuses_existing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let name = dir.path().to_str().unwrap().to_string();
        let err = run(&name, Some(LangChoice::Rust), false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_new_force_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let name = dir.path().to_str().unwrap().to_string();
        run(&name, Some(LangChoice::Cpp), true).unwrap();
        assert!(dir.path().join("quine.cpp").exists());
    }
}
