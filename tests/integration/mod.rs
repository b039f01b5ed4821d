//! Integration test suite for modmanager
//!
//! End-to-end tests that drive the `modmanager` binary against scratch
//! project and catalog directories.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **catalog**: `list` and `search` against a fixture catalog
//! - **errors**: exit codes and error rendering
//! - **manifest**: `init` and `info`
//! - **tree**: the recursive directory walk

use assert_cmd::Command;
use modmanager::constants::MODS_DIR_ENV;
use modmanager::test_utils::TestEnvironment;

mod catalog;
mod errors;
mod manifest;
mod tree;

/// `modmanager --no-color` running in the project directory, reading the
/// environment's catalog.
pub fn modmanager(env: &TestEnvironment) -> Command {
    let mut cmd = Command::cargo_bin("modmanager").unwrap();
    cmd.arg("--no-color")
        .current_dir(&env.project_dir)
        .env(MODS_DIR_ENV, &env.mods_dir)
        .env_remove("RUST_LOG");
    cmd
}

/// Non-empty stdout lines.
pub fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}
