//! Show the manifest of the current project.
//!
//! A missing or unreadable `modmanager.json` is not an error here: the
//! command prints a notice (or `null` in JSON mode) and exits successfully.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::Path;

use super::CliConfig;
use super::common::{OutputFormat, to_json};
use crate::constants::MANIFEST_FILE_NAME;
use crate::manifest::{Manifest, get_info_in};

/// Command to display the installed mods recorded in `modmanager.json`.
#[derive(Args, Debug)]
pub struct InfoCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl InfoCommand {
    /// Show the manifest in the current working directory.
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let cwd = std::env::current_dir()?;
        self.execute_in(&cwd, config)
    }

    /// Show the manifest in `working_dir`.
    pub fn execute_in(self, working_dir: &Path, config: &CliConfig) -> Result<()> {
        let manifest = get_info_in(working_dir);

        match (self.format, manifest) {
            (OutputFormat::Json, manifest) => {
                println!("{}", to_json(&manifest.as_ref().map(Manifest::value))?);
            }
            (OutputFormat::Text, Some(manifest)) => println!("{}", render_text(&manifest)),
            (OutputFormat::Text, None) => {
                if !config.quiet {
                    println!(
                        "{} No usable {} in {}",
                        "⚠".yellow(),
                        MANIFEST_FILE_NAME,
                        working_dir.display()
                    );
                    println!("  Run {} to create one", "modmanager init".bright_white());
                }
            }
        }

        Ok(())
    }
}

fn render_text(manifest: &Manifest) -> String {
    let installed = manifest.installed();
    if installed.is_empty() {
        return "No mods installed".to_string();
    }

    let mut out = format!("{} ({}):", "Installed mods".bold(), installed.len());
    for name in &installed {
        out.push_str("\n  ");
        out.push_str(name);
    }
    out
}
