pub mod cli;
pub mod commands;
pub mod error;
pub mod exec;

pub use cli::Cli;
pub use error::{AppError, AppResult};
pub use exec::CommandOutcome;

use clap::Parser;

/// Main library entry point
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    commands::audit::run_audit(&cli)
}
