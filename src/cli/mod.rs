//! CLI argument parsing for taskdef-clean.
//!
//! Uses clap derive macros. The hook takes no flags: pre-commit passes the
//! staged file paths as positional arguments.

use clap::Parser;
use std::path::PathBuf;

/// Strip ignored and default-valued keys from ECS task definition files.
///
/// Each file is rewritten in place only when its content changes, not merely
/// its formatting. Exits with 1 when any file was rewritten so pre-commit
/// asks for the changes to be re-staged.
#[derive(Parser, Debug)]
#[command(name = "taskdef-clean")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Task definition JSON files to clean.
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
