//! Command-line interface for modmanager.
//!
//! Each command lives in its own module with a clap `Args` struct and an
//! async `execute` method:
//!
//! - `init` - create `modmanager.json` in a project directory
//! - `info` - show the installed mods recorded in the manifest
//! - `list` - every mod in the bundled catalog
//! - `search` - catalog entries whose names match a query
//! - `tree` - every path under a directory
//!
//! # Global Options
//!
//! - `--verbose` - debug logging on stderr
//! - `--quiet` - no logging, no notices; data output is unchanged
//! - `--no-color` - plain output (`NO_COLOR` is honored as well)
//!
//! `RUST_LOG` takes precedence over both verbosity flags.
//!
//! # Example
//!
//! ```bash
//! modmanager init
//! modmanager search --format json map
//! MODMANAGER_MODS_DIR=./mods modmanager list
//! ```

mod common;
mod info;
mod init;
mod list;
mod search;
mod tree;


pub use common::OutputFormat;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::constants::DEFAULT_LOG_FILTER;

/// Runtime configuration for CLI execution.
///
/// Built from the global flags and applied once before a command runs.
/// Commands receive it by reference so tests can drive them without parsing
/// arguments.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter used when `RUST_LOG` is not set.
    ///
    /// `None` means the default (`warn`).
    pub log_level: Option<String>,

    /// Disable ANSI colors.
    pub no_color: bool,

    /// Suppress notices and confirmations.
    pub quiet: bool,
}

impl CliConfig {
    /// Configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log filter for this configuration.
    ///
    /// `RUST_LOG` wins when it is set and parses; otherwise `log_level`,
    /// otherwise the default.
    #[must_use]
    pub fn log_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(self.log_level.as_deref().unwrap_or(DEFAULT_LOG_FILTER))
        })
    }

    /// Apply this configuration to the process.
    ///
    /// Sets the color override and installs the stderr log subscriber. Safe
    /// to call more than once: only the first subscriber is kept.
    pub fn apply_to_env(&self) {
        if self.no_color {
            colored::control::set_override(false);
        }

        let _ = tracing_subscriber::fmt()
            .with_env_filter(self.log_filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(!self.no_color)
            .try_init();
    }
}

/// Manage mods for a project and browse the bundled catalog.
#[derive(Parser, Debug)]
#[command(
    name = "modmanager",
    about = "Manage installed mods and browse the bundled mod catalog",
    version,
    long_about = "modmanager tracks the mods installed in a project (modmanager.json) \
                  and searches the catalog of mods shipped next to the executable."
)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress everything except data output and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Create modmanager.json if it does not exist yet
    Init(init::InitCommand),

    /// Show the mods recorded in modmanager.json
    Info(info::InfoCommand),

    /// List every mod in the bundled catalog
    List(list::ListCommand),

    /// Search the bundled catalog by name
    Search(search::SearchCommand),

    /// Print every file and directory under a path
    Tree(tree::TreeCommand),
}

impl Cli {
    /// Execute with the configuration built from the parsed flags.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Translate the global flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("off".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            no_color: self.no_color,
            quiet: self.quiet,
        }
    }

    /// Execute with an explicit configuration.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.apply_to_env();
        tracing::debug!("Running {:?}", self.command);

        match self.command {
            Commands::Init(cmd) => cmd.execute(&config).await,
            Commands::Info(cmd) => cmd.execute(&config).await,
            Commands::List(cmd) => cmd.execute(&config).await,
            Commands::Search(cmd) => cmd.execute(&config).await,
            Commands::Tree(cmd) => cmd.execute(&config).await,
        }
    }
}
