//! Test utilities for modmanager
//!
//! Helpers for writing tests: logging setup, working directory isolation,
//! and fixtures for manifests and mod catalogs.
//!
//! # Example
//!
//! ```rust,no_run
//! use modmanager::test_utils::{CatalogFixture, TestEnvironment};
//!
//! let env = TestEnvironment::new().unwrap();
//! CatalogFixture::new(["Foo", "bar"]).write_to(&env.mods_dir).unwrap();
//! assert!(env.mods_dir.join("Foo").is_dir());
//! ```

pub mod environment;
pub mod fixtures;

pub use environment::TestEnvironment;
pub use fixtures::{CatalogFixture, ManifestFixture};

use std::path::PathBuf;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Installs a test-writer subscriber once per process. Uses `level` when
/// given, otherwise `RUST_LOG`; with neither, tests run without logging.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}

/// Restores the process working directory when dropped.
///
/// The working directory is process-wide, so tests that change it must also
/// be marked `#[serial]`.
pub struct WorkingDirGuard {
    original: PathBuf,
}

impl WorkingDirGuard {
    /// Remember the current working directory.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            original: std::env::current_dir()?,
        })
    }
}

impl Drop for WorkingDirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}
