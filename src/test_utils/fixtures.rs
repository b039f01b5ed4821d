//! Test fixtures for manifests and mod catalogs

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::MANIFEST_FILE_NAME;

/// Test fixture for sample `modmanager.json` files
#[derive(Clone, Debug)]
pub struct ManifestFixture {
    pub content: String,
}

impl ManifestFixture {
    /// Freshly initialized manifest
    pub fn empty() -> Self {
        Self {
            content: r#"{"installed": []}"#.to_string(),
        }
    }

    /// Manifest with two installed mods
    pub fn with_installed() -> Self {
        Self {
            content: r#"{"installed": ["foo", "bar"]}"#.to_string(),
        }
    }

    /// Content that is not JSON at all
    pub fn invalid() -> Self {
        Self {
            content: "{ installed: [".to_string(),
        }
    }

    /// Arbitrary content
    pub fn raw(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Write `modmanager.json` into `dir`, returning its path
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(MANIFEST_FILE_NAME);
        fs::write(&path, &self.content)
            .with_context(|| format!("Failed to write manifest fixture to {}", path.display()))?;
        Ok(path)
    }
}

/// Test fixture for a bundled mods directory
#[derive(Clone, Debug, Default)]
pub struct CatalogFixture {
    pub mods: Vec<String>,
    pub files: Vec<String>,
}

impl CatalogFixture {
    /// Catalog with one directory per name, each holding a `mod.json`
    pub fn new<I, S>(mods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mods: mods.into_iter().map(Into::into).collect(),
            files: Vec::new(),
        }
    }

    /// Add a plain file at the top level of the catalog
    pub fn with_file(mut self, name: impl Into<String>) -> Self {
        self.files.push(name.into());
        self
    }

    /// Create the catalog under `dir` (created if missing)
    pub fn write_to(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create catalog dir {}", dir.display()))?;

        for name in &self.mods {
            let mod_dir = dir.join(name);
            fs::create_dir_all(&mod_dir)?;
            fs::write(mod_dir.join("mod.json"), format!(r#"{{"name": "{name}"}}"#))?;
        }

        for name in &self.files {
            fs::write(dir.join(name), "")?;
        }

        Ok(())
    }
}
