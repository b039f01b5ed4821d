//! List every mod in the bundled catalog.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::CliConfig;
use super::common::{OutputFormat, render_list};
use crate::catalog::ModCatalog;
use crate::constants::WILDCARD_QUERY;

/// Command to list the catalog, equivalent to `search '*'`.
#[derive(Args, Debug)]
pub struct ListCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl ListCommand {
    /// List the bundled catalog.
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let catalog = ModCatalog::bundled()?;
        self.execute_with_catalog(&catalog, config)
    }

    /// List an explicit catalog.
    pub fn execute_with_catalog(self, catalog: &ModCatalog, config: &CliConfig) -> Result<()> {
        let mods = catalog.search_mod(WILDCARD_QUERY)?;

        if mods.is_empty() && self.format == OutputFormat::Text {
            if !config.quiet {
                println!("{} The catalog at {} is empty", "⚠".yellow(), catalog.root().display());
            }
            return Ok(());
        }

        println!("{}", render_list(&mods, self.format)?);
        Ok(())
    }
}
