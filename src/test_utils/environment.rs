//! Test environment setup and management

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use super::fixtures::{CatalogFixture, ManifestFixture};

/// Scratch project directory plus a separate catalog directory.
///
/// Everything lives under one [`TempDir`] that is removed on drop.
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub project_dir: PathBuf,
    pub mods_dir: PathBuf,
}

impl TestEnvironment {
    /// Create empty project and catalog directories
    pub fn new() -> Result<Self> {
        super::init_test_logging(None);

        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().join("project");
        let mods_dir = temp_dir.path().join("mods");

        fs::create_dir_all(&project_dir)?;
        fs::create_dir_all(&mods_dir)?;

        Ok(Self {
            temp_dir,
            project_dir,
            mods_dir,
        })
    }

    /// Environment whose catalog holds the given mods
    pub fn with_catalog<I, S>(mods: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let env = Self::new()?;
        CatalogFixture::new(mods).write_to(&env.mods_dir)?;
        Ok(env)
    }

    /// Write a manifest into the project directory
    pub fn with_manifest(self, fixture: &ManifestFixture) -> Result<Self> {
        fixture.write_to(&self.project_dir)?;
        Ok(self)
    }

    /// Read a file relative to the project directory
    pub fn read_project_file(&self, name: &str) -> Result<String> {
        Ok(fs::read_to_string(self.project_dir.join(name))?)
    }
}
