//! Atomic file write operations using temp-and-rename strategy.
//!
//! Readers never observe a half-written manifest: content goes to a uniquely
//! named temporary file in the target's directory and is renamed over the
//! target once synced.

use crate::core::file_error::{FileOperation, FileResultExt};
use crate::utils::fs::dirs::ensure_parent_dir;
use anyhow::Result;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Safely writes a string to a file using atomic operations.
///
/// Convenience wrapper around [`atomic_write`].
pub fn safe_write(path: &Path, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Atomically writes bytes to a file using a write-then-rename strategy.
///
/// 1. Writes content to a fresh temporary file in the same directory as `path`
/// 2. Syncs the temporary file to disk
/// 3. Renames the temporary file over the target
///
/// Parent directories are created if missing. Other files in the directory,
/// including ones named like the target with a `.tmp` extension, are never
/// touched. Failures surface as [`FileOperationError`](crate::core::file_error::FileOperationError)
/// with [`FileOperation::Write`].
///
/// # Examples
///
/// ```rust,no_run
/// use modmanager::utils::fs::atomic_write;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// atomic_write(Path::new("modmanager.json"), br#"{"installed":[]}"#)?;
/// # Ok(())
/// # }
/// ```
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    ensure_parent_dir(path)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).with_file_context(
        FileOperation::Write,
        path,
        "creating temporary file for atomic write",
        "atomic_write",
    )?;

    temp.write_all(content).with_file_context(
        FileOperation::Write,
        path,
        "writing temporary file",
        "atomic_write",
    )?;

    temp.as_file().sync_all().with_file_context(
        FileOperation::Write,
        path,
        "syncing temporary file to disk",
        "atomic_write",
    )?;

    temp.persist(path).map_err(|e| e.error).with_file_context(
        FileOperation::Write,
        path,
        "renaming temporary file over target",
        "atomic_write",
    )?;

    Ok(())
}
