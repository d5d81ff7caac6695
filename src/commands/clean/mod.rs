//! Implementation of the cleaning pass over task definition files.
//!
//! Files are processed one after another. A fatal error stops the batch;
//! files already rewritten stay rewritten, which is safe because cleaning is
//! idempotent.


use crate::canonical::to_canonical_string;
use crate::cli::Cli;
use crate::error::{CleanError, Result};
use crate::fs::atomic_write;
use crate::prune::{Removal, prune_document};
use serde_json::Value;
use std::path::Path;

/// What happened to one file.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    /// Keys removed, in the order they were pruned.
    pub removals: Vec<Removal>,
    /// Whether the file was overwritten.
    pub rewritten: bool,
}

/// Execute the cleaning pass for every path on the command line.
///
/// Prints one diagnostic line per removed key to stderr as it is removed.
/// Returns whether any file was rewritten.
pub fn cmd_clean(cli: Cli) -> Result<bool> {
    let mut changed = false;

    for path in &cli.paths {
        let outcome = clean_file(path, |removal| eprintln!("{}", removal))?;
        changed |= outcome.rewritten;
    }

    Ok(changed)
}

/// Clean a single task definition file.
///
/// The file is rewritten only when the canonical form of the pruned document
/// differs from the canonical form of the document as read. Nothing is
/// written when reading, parsing, or pruning fails. Each removal is passed
/// to `report` as it happens.
pub fn clean_file(path: &Path, report: impl FnMut(&Removal)) -> Result<FileOutcome> {
    let text = std::fs::read_to_string(path).map_err(|e| CleanError::io("read", path, e))?;

    let mut document: Value =
        serde_json::from_str(&text).map_err(|source| CleanError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    // Formatting-only differences must not count as a change
    let original = to_canonical_string(&document)?;

    let removals = prune_document(&mut document, report).map_err(|e| e.in_file(path))?;
    let cleaned = to_canonical_string(&document)?;

    let rewritten = cleaned != original;
    if rewritten {
        atomic_write(path, cleaned.as_bytes())?;
    }

    Ok(FileOutcome {
        removals,
        rewritten,
    })
}
