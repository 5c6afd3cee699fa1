use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Output};

/// Outcome of an external command invocation. Success carries the captured
/// stdout; failure carries a printable message embedding the error text.
/// Callers print `text()` and never branch on error types.
#[derive(Debug)]
pub enum CommandOutcome {
    Success(String),
    Failure(String),
}

impl CommandOutcome {
    pub fn text(&self) -> &str {
        match self {
            CommandOutcome::Success(out) | CommandOutcome::Failure(out) => out,
        }
    }
}

/// Run `program` with `args`, optionally in `cwd`, blocking until it exits.
///
/// Linters report findings on stdout while exiting non-zero (flake8 does
/// this), so a non-zero exit that still produced stdout counts as success
/// carrying that text. Only a spawn error or a silent non-zero exit turns
/// into a failure message.
pub fn run_tool(program: &str, args: &[&str], cwd: Option<&Path>) -> CommandOutcome {
    match capture(program, args, cwd) {
        Ok(output) => {
            let stdout = String::from_utf8_lossy(&output.stdout).to_string();
            if output.status.success() || !stdout.trim().is_empty() {
                CommandOutcome::Success(stdout)
            } else {
                let stderr = String::from_utf8_lossy(&output.stderr);
                CommandOutcome::Failure(format!(
                    "Error running command '{}': {}",
                    render_command(program, args),
                    stderr.trim()
                ))
            }
        }
        Err(err) => CommandOutcome::Failure(format!(
            "Error running command '{}': {:#}",
            render_command(program, args),
            err
        )),
    }
}

fn capture(program: &str, args: &[&str], cwd: Option<&Path>) -> Result<Output> {
    let mut command = Command::new(program);
    command.args(args);
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }
    command
        .output()
        .with_context(|| format!("failed to spawn '{program}'"))
}

fn render_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}
