//! Print every path under a directory.
//!
//! Paths come out depth-first in listing order, each directory immediately
//! followed by its contents:
//!
//! ```text
//! /home/me/mods/a.txt
//! /home/me/mods/sub
//! /home/me/mods/sub/b.txt
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::CliConfig;
use super::common::{OutputFormat, render_list};
use crate::utils::walk_dir;

/// Command to walk a directory recursively.
#[derive(Args, Debug)]
pub struct TreeCommand {
    /// Directory to walk
    pub dir: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl TreeCommand {
    /// Walk the directory and print the result.
    ///
    /// Any directory that cannot be listed fails the whole command; nothing
    /// is printed in that case.
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let paths: Vec<String> =
            walk_dir(&self.dir).await?.iter().map(|p| p.display().to_string()).collect();

        if paths.is_empty() && self.format == OutputFormat::Text {
            if !config.quiet {
                println!("{} {} is empty", "⚠".yellow(), self.dir.display());
            }
            return Ok(());
        }

        println!("{}", render_list(&paths, self.format)?);
        Ok(())
    }
}
