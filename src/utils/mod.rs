//! Cross-platform utilities and helpers
//!
//! - [`fs`] - File system operations: atomic writes, JSON I/O, and the
//!   recursive directory walker

pub mod fs;

pub use fs::{atomic_write, ensure_dir, safe_write, walk_dir};
