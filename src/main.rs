//! taskdef-clean: pre-commit hook that normalizes ECS task definitions.
//!
//! This is the main entry point. It parses arguments, cleans every file, and
//! maps the result to the exit code pre-commit expects: 0 when nothing
//! changed, 1 when a file was rewritten, and a distinct code per fatal error.

mod canonical;
mod cli;
mod commands;
mod error;
mod exit_codes;
mod fs;
mod prune;
mod rules;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::cmd_clean(cli) {
        Ok(false) => ExitCode::from(exit_codes::SUCCESS as u8),
        Ok(true) => ExitCode::from(exit_codes::FILES_MODIFIED as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
