//! Exit code constants for taskdef-clean.
//!
//! The hook follows the pre-commit convention:
//! - 0: No file was modified
//! - 1: At least one file was rewritten
//! - 2: File could not be read or written
//! - 3: File is not valid JSON
//! - 4: Document does not have the task definition shape

/// No file needed rewriting.
pub const SUCCESS: i32 = 0;

/// At least one file was rewritten and must be re-staged.
pub const FILES_MODIFIED: i32 = 1;

/// A file could not be read, or its rewrite could not be persisted.
pub const IO_FAILURE: i32 = 2;

/// A file did not parse as JSON.
pub const PARSE_FAILURE: i32 = 3;

/// A document is missing `containerDefinitions` or has the wrong shape.
pub const STRUCTURE_FAILURE: i32 = 4;
