//! Recursive directory enumeration.
//!
//! [`walk_dir`] flattens a directory tree into a single list of paths, files
//! and directories mixed, in depth-first pre-order:
//!
//! ```text
//! root/
//!   a.txt        -> root/a.txt
//!   sub/         -> root/sub
//!     b.txt      -> root/sub/b.txt
//!   z.txt        -> root/z.txt
//! ```
//!
//! Siblings are visited one at a time in the order the OS lists them, and a
//! directory's contents are spliced in directly after the directory itself.
//!
//! There is no cycle detection and no depth limit. A symlink that points back
//! at one of its ancestors makes the walk recurse until the OS refuses to
//! resolve the path; callers that walk untrusted trees must guard against
//! that themselves.

use crate::core::file_error::{FileOperation, FileOperationError, FileResultExt};
use anyhow::Result;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

const CALLER: &str = "utils::fs::walk::walk_dir";

type WalkFuture<'a> = Pin<Box<dyn Future<Output = Result<(), FileOperationError>> + Send + 'a>>;
type ListFuture<'a> = Pin<Box<dyn Future<Output = std::io::Result<Vec<PathBuf>>> + Send + 'a>>;

/// Lists the entries directly inside one directory.
type ListDir = fn(&Path) -> ListFuture<'_>;

/// Recursively lists every file and directory under `directory`.
///
/// The root itself is not part of the result. Every returned path is
/// absolute: a relative `directory` is resolved against the current working
/// directory before the walk starts.
///
/// # Errors
///
/// Any directory that cannot be listed (the root or a nested one) aborts the
/// whole walk; the error is a [`FileOperationError`] for
/// [`FileOperation::ReadDir`] and no partial results are returned.
///
/// An entry that cannot be stat'ed does not abort the walk. It is still
/// included in the result and treated as a plain file, so it is never
/// descended into.
///
/// # Examples
///
/// ```rust,no_run
/// use modmanager::utils::fs::walk_dir;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// for path in walk_dir(Path::new("mods/better-maps")).await? {
///     println!("{}", path.display());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn walk_dir(directory: &Path) -> Result<Vec<PathBuf>> {
    walk_with(directory, list_dir).await
}

async fn walk_with(directory: &Path, list: ListDir) -> Result<Vec<PathBuf>> {
    let root = std::path::absolute(directory).with_file_context(
        FileOperation::ReadDir,
        directory,
        "resolving the walk root",
        CALLER,
    )?;

    let mut results = Vec::new();
    walk_into(&root, list, &mut results).await?;

    tracing::debug!(
        target: "fs::walk",
        "Walked {} entries under {}",
        results.len(),
        root.display()
    );
    Ok(results)
}

fn list_dir(dir: &Path) -> ListFuture<'_> {
    Box::pin(async move {
        let mut entries = tokio::fs::read_dir(dir).await?;
        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            paths.push(entry.path());
        }
        Ok(paths)
    })
}

fn walk_into<'a>(dir: &'a Path, list: ListDir, results: &'a mut Vec<PathBuf>) -> WalkFuture<'a> {
    Box::pin(async move {
        let entries = list(dir).await.with_file_context(
            FileOperation::ReadDir,
            dir,
            "walking directory tree",
            CALLER,
        )?;

        for path in entries {
            let is_dir = match tokio::fs::metadata(&path).await {
                Ok(metadata) => metadata.is_dir(),
                Err(e) => {
                    tracing::debug!(
                        target: "fs::walk",
                        "Cannot stat {}, treating it as a file: {}",
                        path.display(),
                        e
                    );
                    false
                }
            };

            results.push(path.clone());

            if is_dir {
                walk_into(&path, list, results).await?;
            }
        }

        Ok(())
    })
}
