//! I/O operations for manifest files.

use crate::core::ModError;
use crate::utils::fs::{read_text_file, write_json_file};
use crate::manifest::Manifest;
use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::path::Path;

impl Manifest {
    /// Create an empty manifest: `{"installed": []}`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: json!({ "installed": [] }),
        }
    }

    /// Wrap an already parsed document.
    #[must_use]
    pub const fn from_value(value: Value) -> Self {
        Self { value }
    }

    /// The document as parsed.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Identifiers listed under `installed`, in file order.
    ///
    /// A missing, `null` or non-list `installed` reads as empty. List items
    /// that are not strings are rendered as compact JSON.
    #[must_use]
    pub fn installed(&self) -> Vec<String> {
        match self.value.get("installed") {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(name) => name.clone(),
                    other => other.to_string(),
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Load a manifest from a JSON file.
    ///
    /// # Errors
    ///
    /// - A [`crate::core::FileOperationError`] if the file cannot be read
    /// - [`ModError::ManifestParseError`] if the content is not valid JSON or is falsy
    pub fn load(path: &Path) -> Result<Self> {
        let content = read_text_file(path)?;
        Ok(Self::from_json_str(&content, &path.display().to_string())?)
    }

    /// Parse manifest content. `file` is only used in error messages.
    ///
    /// Only invalid JSON and falsy values (`null`, `false`, `0`, `""`) are
    /// rejected.
    pub fn from_json_str(content: &str, file: &str) -> Result<Self, ModError> {
        let parse_error = |reason: String| ModError::ManifestParseError {
            file: file.to_string(),
            reason,
        };

        let value: Value =
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;

        if is_falsy(&value) {
            return Err(parse_error(format!("manifest is empty ({value})")));
        }

        Ok(Self::from_value(value))
    }

    /// Write the manifest as pretty-printed JSON, atomically.
    pub fn save(&self, path: &Path) -> Result<()> {
        write_json_file(path, self, true)
            .with_context(|| format!("Failed to save manifest to {}", path.display()))
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new()
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
