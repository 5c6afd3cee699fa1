use crate::cli::Cli;
use crate::error::{AppError, AppResult};
use crate::exec::{run_tool, CommandOutcome};
use std::path::{Path, PathBuf};

/// Dependency manifest found in the project root, in preference order.
/// A pyproject.toml always wins over a requirements.txt.
#[derive(Debug, PartialEq)]
enum Manifest {
    Pyproject(PathBuf),
    Requirements(PathBuf),
}

pub fn run_audit(args: &Cli) -> AppResult<()> {
    if !args.project_path.is_dir() {
        return Err(AppError::ProjectPathNotFound(
            args.project_path.display().to_string(),
        ));
    }

    println!("--- Starting Audit for: {} ---", args.project_path.display());
    check_dependencies(&args.project_path, &args.python);
    check_code_quality(&args.project_path, &args.python);
    println!("\n--- Audit Complete ---");
    Ok(())
}

/// Scans the project's dependency manifest with pip-audit.
fn check_dependencies(project_path: &Path, python: &str) {
    println!("\n--- Checking for vulnerable dependencies ---");
    // Best-effort install; a failed install just means the scan reports its own error.
    run_tool(python, &["-m", "pip", "install", "pip-audit"], None);

    match locate_manifest(project_path) {
        Some(Manifest::Pyproject(path)) => {
            println!("Auditing dependencies from {}...", path.display());
            // pip-audit reads the project context from its working directory
            let outcome = run_tool(python, &["-m", "pip-audit"], Some(project_path));
            println!("{}", outcome.text());
        }
        Some(Manifest::Requirements(path)) => {
            println!("Auditing {}...", path.display());
            let requirements = path.display().to_string();
            let outcome = run_tool(python, &["-m", "pip-audit", "-r", &requirements], None);
            println!("{}", outcome.text());
        }
        None => println!("No pyproject.toml or requirements.txt found."),
    }
}

fn locate_manifest(project_path: &Path) -> Option<Manifest> {
    let pyproject = project_path.join("pyproject.toml");
    if pyproject.exists() {
        return Some(Manifest::Pyproject(pyproject));
    }
    let requirements = project_path.join("requirements.txt");
    if requirements.exists() {
        return Some(Manifest::Requirements(requirements));
    }
    None
}

/// Lints the project's src/ tree with flake8.
fn check_code_quality(project_path: &Path, python: &str) {
    println!("\n--- Checking code quality with flake8 ---");
    run_tool(python, &["-m", "pip", "install", "flake8"], None);

    let src_path = project_path.join("src");
    if src_path.exists() {
        let src = src_path.display().to_string();
        println!("{}", quality_summary(run_tool("flake8", &[&src], None)));
    } else {
        println!("No src/ directory found to analyze.");
    }
}

/// A clean flake8 run produces no output; say so instead of printing a blank line.
fn quality_summary(outcome: CommandOutcome) -> String {
    match outcome {
        CommandOutcome::Success(out) if out.trim().is_empty() => {
            "flake8 found no issues.".to_string()
        }
        other => other.text().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) {
        fs::write(dir.path().join(name), b"").unwrap();
    }

    #[test]
    fn pyproject_wins_over_requirements() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "pyproject.toml");
        touch(&dir, "requirements.txt");
        assert_eq!(
            locate_manifest(dir.path()),
            Some(Manifest::Pyproject(dir.path().join("pyproject.toml")))
        );
    }

    #[test]
    fn requirements_is_the_fallback() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "requirements.txt");
        assert_eq!(
            locate_manifest(dir.path()),
            Some(Manifest::Requirements(dir.path().join("requirements.txt")))
        );
    }

    #[test]
    fn no_manifest_yields_none() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "setup.cfg");
        assert_eq!(locate_manifest(dir.path()), None);
    }

    #[test]
    fn empty_checker_output_reads_as_no_issues() {
        let clean = quality_summary(CommandOutcome::Success(String::new()));
        assert_eq!(clean, "flake8 found no issues.");
        let whitespace = quality_summary(CommandOutcome::Success("  \n".to_string()));
        assert_eq!(whitespace, "flake8 found no issues.");
    }

    #[test]
    fn checker_findings_pass_through_unchanged() {
        let findings = "src/app.py:1:1: F401 'os' imported but unused\n";
        let summary = quality_summary(CommandOutcome::Success(findings.to_string()));
        assert_eq!(summary, findings);
    }

    #[test]
    fn checker_failure_message_passes_through() {
        let message = "Error running command 'flake8 src': not found";
        let summary = quality_summary(CommandOutcome::Failure(message.to_string()));
        assert_eq!(summary, message);
    }

    #[test]
    fn missing_project_path_is_fatal_and_names_the_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("no-such-project");
        let args = Cli {
            project_path: missing.clone(),
            python: "python3".to_string(),
        };
        let err = run_audit(&args).unwrap_err();
        assert!(err.to_string().contains(missing.display().to_string().as_str()));
    }

    #[test]
    fn a_file_path_is_rejected_like_a_missing_one() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "pyproject.toml");
        let args = Cli {
            project_path: dir.path().join("pyproject.toml"),
            python: "python3".to_string(),
        };
        assert!(run_audit(&args).is_err());
    }
}
