//! Error handling for modmanager
//!
//! The error system follows two rules:
//! 1. **Strongly-typed errors** ([`ModError`]) for failures callers may want to
//!    match on
//! 2. **User-friendly messages** ([`ErrorContext`]) with actionable suggestions
//!    for the command line
//!
//! Library functions return either [`ModError`] directly or `anyhow::Result`
//! with context attached. The binary funnels every failure through
//! [`user_friendly_error`] before printing it.
//!
//! # Examples
//!
//! ```rust,no_run
//! use modmanager::core::{ModError, user_friendly_error};
//!
//! let error = anyhow::Error::from(ModError::CatalogNotFound {
//!     path: "/opt/modmanager/mods".to_string(),
//! });
//! let ctx = user_friendly_error(error);
//! ctx.display(); // colored error with a suggestion
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

use crate::constants::MODS_DIR_ENV;
use crate::core::file_error::FileOperationError;

/// The main error type for modmanager operations
///
/// # Error Categories
///
/// - **Manifest**: [`ManifestParseError`](Self::ManifestParseError)
/// - **Catalog**: [`CatalogNotFound`](Self::CatalogNotFound),
///   [`InvalidSearchPattern`](Self::InvalidSearchPattern)
/// - **File system**: [`FileSystemError`](Self::FileSystemError),
///   [`PermissionDenied`](Self::PermissionDenied)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModError {
    /// Manifest exists but is not usable JSON
    #[error("Invalid manifest file in {file}: {reason}")]
    ManifestParseError {
        /// Path of the manifest
        file: String,
        /// Parser message
        reason: String,
    },

    /// The bundled mods directory is missing
    #[error("Mod catalog directory not found: {path}")]
    CatalogNotFound {
        /// Directory that was expected to hold the catalog
        path: String,
    },

    /// A search query that does not compile as a regular expression
    #[error("Invalid search pattern '{pattern}': {reason}")]
    InvalidSearchPattern {
        /// The query as typed by the user
        pattern: String,
        /// Compiler message from the regex engine
        reason: String,
    },

    /// General file system failure
    #[error("File system error: {operation}")]
    FileSystemError {
        /// What was being attempted
        operation: String,
        /// Path involved
        path: String,
    },

    /// Insufficient permissions
    #[error("Permission denied: {operation}")]
    PermissionDenied {
        /// What was being attempted
        operation: String,
        /// Path involved
        path: String,
    },

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

/// Error wrapper that adds user-facing details and a suggestion.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: ModError,
    /// What to do about it
    pub suggestion: Option<String>,
    /// Extra explanation shown under the error line
    pub details: Option<String>,
}

impl ErrorContext {
    /// Wrap an error with no suggestion or details.
    #[must_use]
    pub const fn new(error: ModError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Attach a suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attach details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] suitable for the terminal.
///
/// Known error types are recognized by downcasting, in this order:
/// [`ModError`], [`FileOperationError`], [`std::io::Error`]. Anything else is
/// rendered with its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(mod_error) = error.downcast_ref::<ModError>() {
        return create_error_context(mod_error);
    }

    if let Some(file_error) = error.downcast_ref::<FileOperationError>() {
        let path = file_error.file_path.display().to_string();
        let error = match file_error.source.kind() {
            std::io::ErrorKind::PermissionDenied => ModError::PermissionDenied {
                operation: file_error.operation.to_string(),
                path,
            },
            _ => ModError::FileSystemError {
                operation: format!("{} {}", file_error.operation, path),
                path,
            },
        };
        return ErrorContext::new(error).with_details(file_error.user_message());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(ModError::PermissionDenied {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check file ownership and permissions")
                .with_details("modmanager does not have permission to read or write a file");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(ModError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct")
                .with_details("A required file or directory cannot be found");
            }
            _ => {}
        }
    }

    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(ModError::Other {
        message,
    })
}

fn create_error_context(error: &ModError) -> ErrorContext {
    match error {
        ModError::ManifestParseError {
            file,
            ..
        } => {
            let suggestion = format!(
                "Fix the JSON in {file} or delete it and run 'modmanager init'"
            );
            ErrorContext::new(error.clone()).with_suggestion(suggestion)
        }

        ModError::CatalogNotFound {
            path,
        } => {
            let details = format!("Expected the bundled mods directory at {path}");
            ErrorContext::new(error.clone())
                .with_suggestion(format!(
                    "Reinstall modmanager with its mods directory, or point {MODS_DIR_ENV} at it"
                ))
                .with_details(details)
        }

        ModError::InvalidSearchPattern {
            ..
        } => ErrorContext::new(error.clone())
            .with_suggestion("Escape regex metacharacters or pass --literal to search for plain text")
            .with_details("Search queries are regular expressions matched against lower-cased mod names"),

        ModError::PermissionDenied {
            operation,
            path,
        } => {
            let details = format!("Cannot {operation} due to insufficient permissions on {path}");
            ErrorContext::new(error.clone())
                .with_suggestion(match cfg!(windows) {
                    true => "Check file permissions in File Explorer",
                    false => "Check file permissions with 'ls -la'",
                })
                .with_details(details)
        }

        _ => ErrorContext::new(error.clone()),
    }
}
