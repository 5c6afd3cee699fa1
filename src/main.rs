use std::process::ExitCode;

fn main() -> ExitCode {
    match project_auditor::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // The audit report lives on stdout, so its one fatal error does too.
            println!("{err}");
            ExitCode::from(1)
        }
    }
}
