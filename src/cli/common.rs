//! Output helpers shared by the CLI commands

use anyhow::{Context, Result};
use serde::Serialize;

/// Output format for commands that print data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One item per line, with colored notices.
    #[default]
    Text,
    /// Pretty-printed JSON on stdout, nothing else.
    Json,
}

/// Serialize `value` as pretty JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output as JSON")
}

/// Render a list of names or paths.
///
/// Text output is one entry per line; an empty list renders as an empty
/// string so callers can decide whether to print a notice instead.
pub fn render_list<T: Serialize + std::fmt::Display>(
    items: &[T],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(items),
        OutputFormat::Text => {
            Ok(items.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n"))
        }
    }
}
