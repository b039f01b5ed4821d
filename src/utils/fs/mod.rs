//! File system utilities
//!
//! - [`dirs`] - directory creation
//! - [`atomic`] - temp-and-rename writes
//! - [`formats`] - text and JSON helpers with path context in errors
//! - [`walk`] - recursive directory enumeration
//!
//! # Examples
//!
//! ```rust,no_run
//! use modmanager::utils::fs::{ensure_dir, safe_write, walk_dir};
//! use std::path::Path;
//!
//! # async fn example() -> anyhow::Result<()> {
//! ensure_dir(Path::new("output"))?;
//! safe_write(Path::new("output/notes.txt"), "hello")?;
//! let everything = walk_dir(Path::new("output")).await?;
//! # Ok(())
//! # }
//! ```

pub mod atomic;
pub mod dirs;
pub mod formats;
pub mod walk;

pub use atomic::{atomic_write, safe_write};
pub use dirs::{ensure_dir, ensure_parent_dir};
pub use formats::{read_text_file, write_json_file, write_text_file};
pub use walk::walk_dir;
