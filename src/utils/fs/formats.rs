//! File format operations for reading and writing structured data files.
//!
//! All write operations go through [`super::atomic::safe_write`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use modmanager::utils::fs::formats::{read_text_file, write_json_file};
//! use serde::{Deserialize, Serialize};
//! use std::path::Path;
//!
//! #[derive(Serialize, Deserialize)]
//! struct State {
//!     installed: Vec<String>,
//! }
//!
//! # fn example() -> anyhow::Result<()> {
//! write_json_file(Path::new("state.json"), &State { installed: vec![] }, true)?;
//! let loaded: State = serde_json::from_str(&read_text_file(Path::new("state.json"))?)?;
//! # Ok(())
//! # }
//! ```

use crate::core::file_error::{FileOperation, FileResultExt};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads a text file with proper error handling and context.
///
/// # Errors
/// Returns a [`crate::core::FileOperationError`] if the file cannot be read
pub fn read_text_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path).with_file_context(
        FileOperation::Read,
        path,
        "reading text file",
        "utils::fs::formats::read_text_file",
    )?)
}

/// Writes a text file atomically with proper error handling.
pub fn write_text_file(path: &Path, content: &str) -> Result<()> {
    super::atomic::safe_write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Writes data as JSON to a file atomically.
///
/// Pretty output ends with a trailing newline.
pub fn write_json_file<T>(path: &Path, data: &T, pretty: bool) -> Result<()>
where
    T: serde::Serialize,
{
    let json = if pretty {
        let mut json = serde_json::to_string_pretty(data)?;
        json.push('\n');
        json
    } else {
        serde_json::to_string(data)?
    };

    write_text_file(path, &json)
        .with_context(|| format!("Failed to write JSON file: {}", path.display()))
}
