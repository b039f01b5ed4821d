//! Create a `modmanager.json` manifest.
//!
//! # Examples
//!
//! ```bash
//! # In the current directory
//! modmanager init
//!
//! # In another directory (created if missing)
//! modmanager init --path ./my-game
//! ```
//!
//! An existing manifest is never overwritten; running `init` twice is safe.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::CliConfig;
use crate::manifest::{ManifestStatus, ensure_manifest, manifest_path};

/// Command to create an empty manifest in a project directory.
#[derive(Args, Debug)]
pub struct InitCommand {
    /// Directory to create the manifest in (defaults to current directory)
    ///
    /// Created if it does not exist.
    #[arg(short, long)]
    pub path: Option<PathBuf>,
}

impl InitCommand {
    /// Create the manifest and report whether it was written.
    ///
    /// Unlike [`crate::manifest::initialize`], this waits for the write so
    /// the process cannot exit before the file lands.
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let target_dir = self.path.unwrap_or_else(|| PathBuf::from("."));
        let status = ensure_manifest(&target_dir).await?;

        if !config.quiet {
            let path = manifest_path(&target_dir);
            match status {
                ManifestStatus::Created => {
                    println!("{} Initialized {}", "✓".green(), path.display());
                }
                ManifestStatus::AlreadyExists => {
                    println!("{} {} already exists, left unchanged", "✓".green(), path.display());
                }
            }
        }

        Ok(())
    }
}
