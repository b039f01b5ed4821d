//! Search the bundled catalog by name.
//!
//! # Examples
//!
//! ```bash
//! # Case-insensitive, unanchored regex
//! modmanager search map
//! modmanager search '^quiet'
//!
//! # Everything
//! modmanager search '*'
//!
//! # Plain text, no regex
//! modmanager search --literal 'c++'
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::CliConfig;
use super::common::{OutputFormat, render_list};
use crate::catalog::ModCatalog;

/// Command to find catalog entries whose names match a query.
#[derive(Args, Debug)]
pub struct SearchCommand {
    /// Regular expression matched against lower-cased mod names; `*` lists all
    pub query: String,

    /// Treat the query as plain text instead of a regular expression
    #[arg(long)]
    pub literal: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl SearchCommand {
    /// Search the bundled catalog.
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let catalog = ModCatalog::bundled()?;
        self.execute_with_catalog(&catalog, config)
    }

    /// Search an explicit catalog.
    pub fn execute_with_catalog(self, catalog: &ModCatalog, config: &CliConfig) -> Result<()> {
        let matches = self.find(catalog)?;

        if matches.is_empty() && self.format == OutputFormat::Text {
            if !config.quiet {
                println!("{} No mods match '{}'", "⚠".yellow(), self.query);
            }
            return Ok(());
        }

        println!("{}", render_list(&matches, self.format)?);
        Ok(())
    }

    fn find(&self, catalog: &ModCatalog) -> Result<Vec<String>> {
        if self.literal {
            catalog.search_literal(&self.query)
        } else {
            catalog.search_mod(&self.query)
        }
    }
}
