use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "project-auditor")]
#[command(about = "Audits a Python project for vulnerable dependencies and code-quality issues")]
#[command(version)]
pub struct Cli {
    /// Root path of the project to audit
    #[arg(help = "Root path of the project to audit")]
    pub project_path: PathBuf,

    /// Python interpreter used to install and run the audit tools
    #[arg(long, env = "PYTHON", default_value = "python3")]
    pub python: String,
}
