//! modmanager - a small mod manager helper
//!
//! Tracks which mods are installed in a project and browses the catalog of
//! mods bundled with the tool.
//!
//! # Concepts
//!
//! - **Manifest**: `modmanager.json` in the project's working directory,
//!   shaped `{"installed": [...]}`. See [`manifest`].
//! - **Catalog**: the `mods` directory next to the executable; each entry
//!   directly inside it is one mod. See [`catalog`].
//! - **Walk**: recursive, depth-first enumeration of everything under a
//!   directory. See [`utils::walk_dir`].
//!
//! # Core Modules
//!
//! - [`catalog`] - listing and searching the bundled mods
//! - [`cli`] - the `modmanager` command-line interface
//! - [`constants`] - file names, environment variables and defaults
//! - [`core`] - error types and user-facing error rendering
//! - [`manifest`] - creating and reading `modmanager.json`
//! - [`utils`] - file helpers and the directory walker
//!
//! # Command-Line Usage
//!
//! ```bash
//! # Create modmanager.json in the current directory
//! modmanager init
//!
//! # Show what the manifest records
//! modmanager info
//!
//! # Browse the catalog
//! modmanager list
//! modmanager search map
//!
//! # Everything under a directory
//! modmanager tree ./mods
//! ```
//!
//! # Library Usage
//!
//! ```rust,no_run
//! use modmanager::catalog::ModCatalog;
//! use modmanager::manifest::get_info;
//!
//! # fn example() -> anyhow::Result<()> {
//! if let Some(manifest) = get_info() {
//!     println!("{} mods installed", manifest.installed().len());
//! }
//!
//! let catalog = ModCatalog::bundled()?;
//! println!("{} mods available", catalog.get_mods()?.len());
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod cli;
pub mod constants;
pub mod core;
pub mod manifest;
pub mod utils;

// Test utilities (available for both unit and integration tests)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
