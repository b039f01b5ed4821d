//! The bundled mod catalog.
//!
//! modmanager ships with a `mods` directory next to its executable. Every
//! entry directly inside it (usually a directory, but plain files count too)
//! is one mod, identified by its name. Nothing else about a mod is modeled.
//!
//! ```text
//! modmanager          <- executable
//! mods/
//!   better-maps/      -> "better-maps"
//!   Quiet Footsteps/  -> "Quiet Footsteps"
//! ```
//!
//! A [`ModCatalog`] is a plain value pointing at such a directory. It holds no
//! cached state: every call lists the directory again.
//!
//! # Examples
//!
//! ```rust,no_run
//! use modmanager::catalog::ModCatalog;
//!
//! # fn example() -> anyhow::Result<()> {
//! let catalog = ModCatalog::bundled()?;
//! for name in catalog.search_mod("map")? {
//!     println!("{name}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod search;

pub use search::NameMatcher;

use crate::constants::{MODS_DIR_ENV, MODS_DIR_NAME, WILDCARD_QUERY};
use crate::core::ModError;
use crate::core::file_error::{FileOperation, FileResultExt};
use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::{Path, PathBuf};

const CALLER: &str = "catalog::get_mods";

/// A directory whose immediate entries are the available mods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModCatalog {
    root: PathBuf,
}

impl ModCatalog {
    /// Catalog rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
        }
    }

    /// The catalog that ships with the tool.
    ///
    /// Resolves to `<directory of the executable>/mods`, unless
    /// `MODMANAGER_MODS_DIR` is set to a non-empty value.
    pub fn bundled() -> Result<Self> {
        if let Some(dir) = std::env::var_os(MODS_DIR_ENV).filter(|v| !v.is_empty()) {
            tracing::debug!("Using catalog from {}: {}", MODS_DIR_ENV, Path::new(&dir).display());
            return Ok(Self::new(dir));
        }

        let exe = std::env::current_exe().context("Cannot locate the modmanager executable")?;
        let dir = exe
            .parent()
            .ok_or_else(|| anyhow!("Executable path has no parent: {}", exe.display()))?
            .join(MODS_DIR_NAME);

        Ok(Self::new(dir))
    }

    /// The catalog directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Names of every entry in the catalog directory.
    ///
    /// One level only, files and directories alike, in the order the
    /// filesystem lists them.
    ///
    /// # Errors
    ///
    /// [`ModError::CatalogNotFound`] when the directory does not exist; a
    /// [`crate::core::FileOperationError`] when it cannot be listed.
    pub fn get_mods(&self) -> Result<Vec<String>> {
        let listing = fs::read_dir(&self.root);
        if matches!(&listing, Err(e) if e.kind() == std::io::ErrorKind::NotFound) {
            return Err(ModError::CatalogNotFound {
                path: self.root.display().to_string(),
            }
            .into());
        }
        let entries = listing.with_file_context(
            FileOperation::ReadDir,
            &self.root,
            "listing the mod catalog",
            CALLER,
        )?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.with_file_context(
                FileOperation::ReadDir,
                &self.root,
                "listing the mod catalog",
                CALLER,
            )?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }

        tracing::debug!("Catalog {} holds {} entries", self.root.display(), names.len());
        Ok(names)
    }

    /// Search the catalog by name.
    ///
    /// `*` returns the whole catalog. Any other query is treated as a regular
    /// expression, see [`NameMatcher::pattern`]. Matches keep catalog order;
    /// an empty query or one that matches nothing yields an empty list.
    ///
    /// The query is only compiled when there is at least one mod to test, so
    /// an empty catalog yields an empty list for any query.
    ///
    /// # Errors
    ///
    /// Listing errors from [`get_mods`](Self::get_mods), then
    /// [`ModError::InvalidSearchPattern`] for a query that does not compile.
    pub fn search_mod(&self, query: &str) -> Result<Vec<String>> {
        if query == WILDCARD_QUERY {
            return self.get_mods();
        }

        let mods = self.get_mods()?;
        if mods.is_empty() {
            return Ok(mods);
        }

        let matched = match NameMatcher::pattern(query)? {
            Some(matcher) => matcher.filter(mods),
            None => Vec::new(),
        };

        tracing::debug!("Query '{}' matched {} mods", query, matched.len());
        Ok(matched)
    }

    /// Search the catalog for names containing `query` as plain text,
    /// case-insensitively.
    ///
    /// Unlike [`search_mod`](Self::search_mod), `*` is not special here.
    pub fn search_literal(&self, query: &str) -> Result<Vec<String>> {
        let mods = self.get_mods()?;
        if mods.is_empty() {
            return Ok(mods);
        }

        Ok(match NameMatcher::literal(query)? {
            Some(matcher) => matcher.filter(mods),
            None => Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::CatalogFixture;
    use serial_test::serial;
    use std::collections::HashSet;
    use tempfile::tempdir;

    fn sorted(mut names: Vec<String>) -> Vec<String> {
        names.sort();
        names
    }

    #[test]
    fn test_get_mods_lists_files_and_directories() {
        let temp = tempdir().unwrap();
        CatalogFixture::new(["Foo", "bar"]).with_file("README.txt").write_to(temp.path()).unwrap();

        let catalog = ModCatalog::new(temp.path());
        assert_eq!(sorted(catalog.get_mods().unwrap()), vec!["Foo", "README.txt", "bar"]);
    }

    #[test]
    fn test_get_mods_is_not_recursive() {
        let temp = tempdir().unwrap();
        CatalogFixture::new(["outer"]).write_to(temp.path()).unwrap();
        std::fs::create_dir(temp.path().join("outer").join("inner")).unwrap();

        assert_eq!(ModCatalog::new(temp.path()).get_mods().unwrap(), vec!["outer"]);
    }

    #[test]
    fn test_get_mods_missing_directory() {
        let temp = tempdir().unwrap();
        let catalog = ModCatalog::new(temp.path().join("mods"));

        let error = catalog.get_mods().unwrap_err();
        assert!(matches!(
            error.downcast_ref::<ModError>(),
            Some(ModError::CatalogNotFound { .. })
        ));
    }

    #[test]
    fn test_get_mods_on_a_file_fails() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("mods");
        std::fs::write(&file, "").unwrap();

        let error = ModCatalog::new(&file).get_mods().unwrap_err();
        assert!(error.downcast_ref::<crate::core::FileOperationError>().is_some());
    }

    #[test]
    fn test_search_wildcard_returns_everything_once() {
        let temp = tempdir().unwrap();
        CatalogFixture::new(["Foo", "bar", "fortune"]).write_to(temp.path()).unwrap();

        let all = ModCatalog::new(temp.path()).search_mod("*").unwrap();

        assert_eq!(all.len(), 3);
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), 3);
        assert_eq!(sorted(all), vec!["Foo", "bar", "fortune"]);
    }

    #[test]
    fn test_search_substring() {
        let temp = tempdir().unwrap();
        CatalogFixture::new(["Foo", "bar", "fortune"]).write_to(temp.path()).unwrap();
        let catalog = ModCatalog::new(temp.path());

        assert_eq!(sorted(catalog.search_mod("fo").unwrap()), vec!["Foo", "fortune"]);
        assert!(catalog.search_mod("zzz").unwrap().is_empty());
        assert!(catalog.search_mod("").unwrap().is_empty());
    }

    #[test]
    fn test_search_keeps_catalog_order() {
        let temp = tempdir().unwrap();
        CatalogFixture::new(["alpha", "beta", "alphabet", "gamma"]).write_to(temp.path()).unwrap();
        let catalog = ModCatalog::new(temp.path());

        let listing = catalog.get_mods().unwrap();
        let expected: Vec<String> =
            listing.into_iter().filter(|name| name.contains("alpha")).collect();
        assert_eq!(catalog.search_mod("alpha").unwrap(), expected);
    }

    #[test]
    fn test_search_invalid_pattern() {
        let temp = tempdir().unwrap();
        CatalogFixture::new(["Foo"]).write_to(temp.path()).unwrap();

        let error = ModCatalog::new(temp.path()).search_mod("[").unwrap_err();
        assert!(matches!(
            error.downcast_ref::<ModError>(),
            Some(ModError::InvalidSearchPattern { .. })
        ));
    }

    #[test]
    fn test_search_empty_catalog_never_compiles_query() {
        let temp = tempdir().unwrap();
        let catalog = ModCatalog::new(temp.path());

        assert_eq!(catalog.search_mod("[").unwrap(), Vec::<String>::new());
        assert_eq!(catalog.search_mod("fo").unwrap(), Vec::<String>::new());
        assert_eq!(catalog.search_literal("(").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_search_missing_catalog_propagates() {
        let temp = tempdir().unwrap();
        let catalog = ModCatalog::new(temp.path().join("absent"));

        assert!(catalog.search_mod("*").is_err());
        assert!(catalog.search_mod("fo").is_err());
    }

    #[test]
    fn test_search_literal() {
        let temp = tempdir().unwrap();
        CatalogFixture::new(["C++ Tools", "cc", "star*"]).write_to(temp.path()).unwrap();
        let catalog = ModCatalog::new(temp.path());

        assert_eq!(catalog.search_literal("c++").unwrap(), vec!["C++ Tools"]);
        assert_eq!(catalog.search_literal("*").unwrap(), vec!["star*"]);
    }

    #[test]
    #[serial]
    fn test_bundled_honors_env_override() {
        let temp = tempdir().unwrap();
        // SAFETY: serialized with the other tests that touch the environment
        unsafe { std::env::set_var(MODS_DIR_ENV, temp.path()) };
        let catalog = ModCatalog::bundled();
        unsafe { std::env::remove_var(MODS_DIR_ENV) };

        assert_eq!(catalog.unwrap().root(), temp.path());
    }

    #[test]
    #[serial]
    fn test_bundled_defaults_next_to_executable() {
        unsafe { std::env::remove_var(MODS_DIR_ENV) };

        let catalog = ModCatalog::bundled().unwrap();
        let exe_dir = std::env::current_exe().unwrap().parent().unwrap().to_path_buf();
        assert_eq!(catalog.root(), exe_dir.join(MODS_DIR_NAME));
    }
}
