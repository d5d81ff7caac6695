//! Command implementations for taskdef-clean.
//!
//! There is a single operation, cleaning a batch of files, so dispatch is a
//! direct call rather than a subcommand match.

mod clean;

pub use clean::cmd_clean;
