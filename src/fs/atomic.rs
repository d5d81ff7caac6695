//! Atomic file replacement.
//!
//! All rewrites follow this pattern:
//! 1. Resolve symlinks so the link's target is rewritten, not the link
//! 2. Write content to a uniquely named temporary file next to the target
//! 3. Copy the target's permissions onto it and sync it to disk
//! 4. Rename it over the target
//!
//! `rename` replaces the destination atomically when both paths are on the
//! same filesystem, which holds because the temporary file is a sibling.

use crate::error::{CleanError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Atomically replace the contents of `path` with `content`.
///
/// An existing file keeps its permissions, and a symlink keeps pointing at
/// the file that now holds the new content.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let target = resolve_target(path)?;
    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| CleanError::io("create", path, e))?;

    temp.write_all(content)
        .map_err(|e| CleanError::io("write", path, e))?;

    if let Ok(metadata) = fs::metadata(&target) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| CleanError::io("set permissions on", path, e))?;
    }

    temp.as_file()
        .sync_all()
        .map_err(|e| CleanError::io("write", path, e))?;

    // On failure the temporary file is removed when the error drops it
    temp.persist(&target)
        .map_err(|e| CleanError::io("replace", path, e.error))?;

    // Persist the directory entry as well
    if let Ok(dir) = File::open(parent) {
        let _ = dir.sync_all();
    }

    Ok(())
}

/// The file a write to `path` should land in: symlinks resolved, and
/// `path` itself when it does not exist yet.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(e) => Err(CleanError::io("resolve", path, e)),
    }
}
