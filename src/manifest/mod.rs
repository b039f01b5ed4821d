//! Project manifest (`modmanager.json`) bootstrap and access.
//!
//! Every project directory that modmanager manages carries a flat JSON
//! manifest recording which mods are installed in it:
//!
//! ```json
//! {
//!   "installed": ["better-maps", "quiet-footsteps"]
//! }
//! ```
//!
//! This module only creates and reads that file. The manifest always lives
//! directly inside the working directory; parent directories are never
//! searched.
//!
//! # Entry points
//!
//! - [`initialize`] - fire-and-forget creation of an empty manifest
//! - [`ensure_manifest`] - the same creation step, awaited, with its outcome
//! - [`get_info`] / [`get_info_in`] - read the manifest, `None` when missing
//!   or unreadable
//!
//! # Examples
//!
//! ```rust,no_run
//! use modmanager::manifest::{ensure_manifest, get_info_in, ManifestStatus};
//! use std::path::Path;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let project = Path::new("my-game");
//! if ensure_manifest(project).await? == ManifestStatus::Created {
//!     println!("created a fresh manifest");
//! }
//!
//! let manifest = get_info_in(project).expect("manifest was just created");
//! assert!(manifest.installed().is_empty());
//! # Ok(())
//! # }
//! ```

mod manifest_io;


use crate::constants::MANIFEST_FILE_NAME;
use crate::core::file_error::FileOps;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Contents of `modmanager.json`.
///
/// Any valid, truthy JSON document is a manifest; nothing about its shape is
/// validated. [`installed`](Self::installed) reads the `installed` list
/// leniently, and the document itself serializes back exactly as parsed, so
/// keys written by other tools survive a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    value: serde_json::Value,
}

/// Outcome of [`ensure_manifest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestStatus {
    /// A new empty manifest was written.
    Created,
    /// A manifest was already present and left untouched.
    AlreadyExists,
}

/// Path of the manifest file for `working_dir`.
#[must_use]
pub fn manifest_path(working_dir: &Path) -> PathBuf {
    working_dir.join(MANIFEST_FILE_NAME)
}

/// Make sure `working_dir` has a manifest, without waiting for it.
///
/// Defaults to the current working directory. The existence check and the
/// write of `{"installed": []}` run in the background and this function
/// returns `true` straight away, so the file may not exist yet when the
/// caller resumes. Use [`ensure_manifest`] when the outcome matters.
///
/// The background step is spawned onto the current tokio runtime when there
/// is one, and onto a detached thread with its own runtime otherwise.
/// Failures are logged at `warn` and never reported to the caller.
pub fn initialize(working_dir: Option<&Path>) -> bool {
    let working_dir = match working_dir {
        Some(dir) => dir.to_path_buf(),
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                tracing::warn!("Cannot determine the working directory for the manifest: {e}");
                return true;
            }
        },
    };

    let task = async move {
        if let Err(e) = ensure_manifest(&working_dir).await {
            tracing::warn!(
                "Failed to initialize manifest in {}: {:#}",
                working_dir.display(),
                e
            );
        }
    };

    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            handle.spawn(task);
        }
        Err(_) => {
            std::thread::spawn(move || {
                match tokio::runtime::Builder::new_current_thread().enable_all().build() {
                    Ok(runtime) => runtime.block_on(task),
                    Err(e) => tracing::warn!("Cannot start runtime for manifest initialization: {e}"),
                }
            });
        }
    }

    true
}

/// Create an empty manifest in `working_dir` unless one already exists.
///
/// The existence check is asynchronous; the write itself is a blocking atomic
/// write. An existing manifest is never overwritten, whatever its content.
///
/// # Errors
///
/// Returns an error if the existence check fails for a reason other than the
/// file being absent, or if the manifest cannot be written.
pub async fn ensure_manifest(working_dir: &Path) -> Result<ManifestStatus> {
    let path = manifest_path(working_dir);

    let exists = FileOps::exists_with_context(
        &path,
        "checking for an existing manifest",
        "manifest::ensure_manifest",
    )
    .await?;

    if exists {
        tracing::debug!("Manifest already present at {}", path.display());
        return Ok(ManifestStatus::AlreadyExists);
    }

    Manifest::new().save(&path)?;
    tracing::info!("Created manifest at {}", path.display());
    Ok(ManifestStatus::Created)
}

/// Read the manifest of the current working directory.
///
/// See [`get_info_in`].
#[must_use]
pub fn get_info() -> Option<Manifest> {
    match std::env::current_dir() {
        Ok(dir) => get_info_in(&dir),
        Err(e) => {
            tracing::debug!("Cannot determine the working directory: {e}");
            None
        }
    }
}

/// Read the manifest in `working_dir`.
///
/// Returns `None` when the file does not exist, cannot be read, is not valid
/// JSON, or holds a falsy JSON value (`null`, `false`, `0`, `""`). Any other
/// document is returned as-is, whatever its shape. The reason for a `None` is
/// logged at `debug`.
#[must_use]
pub fn get_info_in(working_dir: &Path) -> Option<Manifest> {
    let path = manifest_path(working_dir);

    if !path.exists() {
        tracing::debug!("No manifest at {}", path.display());
        return None;
    }

    match Manifest::load(&path) {
        Ok(manifest) => Some(manifest),
        Err(e) => {
            tracing::debug!("Ignoring unreadable manifest {}: {:#}", path.display(), e);
            None
        }
    }
}
