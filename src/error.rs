//! Error types for taskdef-clean.
//!
//! Uses thiserror for derive macros. Every variant is fatal for the file being
//! processed and maps to its own exit code.

use crate::exit_codes;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for cleaning operations.
#[derive(Error, Debug)]
pub enum CleanError {
    /// Reading, writing, or replacing a file failed.
    #[error("failed to {action} '{}': {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid JSON.
    #[error("failed to parse '{}' as JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document is not a task definition (root or `containerDefinitions` has the wrong shape).
    #[error("invalid task definition: {0}")]
    Structure(String),

    /// Serializing the canonical form failed.
    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CleanError {
    /// Build an I/O error for `path`.
    pub fn io(action: &'static str, path: &Path, source: std::io::Error) -> Self {
        CleanError::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Prefix a structure error with the file it was found in.
    ///
    /// Other variants already carry their path and are returned unchanged.
    pub fn in_file(self, path: &Path) -> Self {
        match self {
            CleanError::Structure(msg) => {
                CleanError::Structure(format!("{}: {}", path.display(), msg))
            }
            other => other,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CleanError::Io { .. } => exit_codes::IO_FAILURE,
            CleanError::Parse { .. } => exit_codes::PARSE_FAILURE,
            CleanError::Structure(_) => exit_codes::STRUCTURE_FAILURE,
            CleanError::Serialize(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for cleaning operations.
pub type Result<T> = std::result::Result<T, CleanError>;
