//! Global constants used throughout the modmanager codebase.
//!
//! File names, directory names, and environment variable names that are
//! shared between the manifest, the catalog, and the command line live here
//! so they are discoverable in one place.

/// Name of the per-project manifest file.
///
/// The manifest always lives directly inside the working directory it
/// describes, never in a parent directory.
pub const MANIFEST_FILE_NAME: &str = "modmanager.json";

/// Name of the bundled catalog directory that ships next to the executable.
pub const MODS_DIR_NAME: &str = "mods";

/// Environment variable that overrides the bundled catalog location.
///
/// Packagers that install the catalog somewhere other than next to the
/// binary point this at the real directory.
pub const MODS_DIR_ENV: &str = "MODMANAGER_MODS_DIR";

/// Wildcard query that lists the whole catalog instead of searching it.
pub const WILDCARD_QUERY: &str = "*";

/// Default log filter when neither `RUST_LOG` nor `--verbose` is given.
pub const DEFAULT_LOG_FILTER: &str = "warn";
