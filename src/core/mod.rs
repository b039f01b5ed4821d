//! Core types and error handling for modmanager
//!
//! - [`error`] - [`ModError`], [`ErrorContext`], and [`user_friendly_error`]
//! - [`file_error`] - file operation errors that carry path and purpose
//!
//! # Error Handling Pattern
//!
//! ```rust
//! use modmanager::core::{ModError, user_friendly_error};
//! use anyhow::Result;
//!
//! fn example_operation() -> Result<String> {
//!     Err(ModError::CatalogNotFound {
//!         path: "/opt/modmanager/mods".to_string(),
//!     }
//!     .into())
//! }
//!
//! if let Err(e) = example_operation() {
//!     let friendly = user_friendly_error(e);
//!     assert!(friendly.suggestion.is_some());
//! }
//! ```

pub mod error;
pub mod file_error;

pub use error::{ErrorContext, ModError, user_friendly_error};
pub use file_error::{FileOperation, FileOperationError, FileOps, FileResultExt};
