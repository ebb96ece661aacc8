//! Rendering of version results
//!
//! Every subcommand result goes through an [`OutputFormatter`]: colored or
//! plain text for terminals, pretty JSON for scripts.

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{TextFormatter, VersionChangeType};

use crate::domain::{HistoryEntry, ReleaseRecord, UpdateDecision, VersionReport};
use crate::error::CheckError;
use std::io::Write;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable tables and messages
    Text { color: bool },
    /// One pretty-printed JSON document per run
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text { color: true }
    }
}

impl OutputFormat {
    /// Select the format from the `--json` and `--no-color` flags.
    ///
    /// `--no-color` has no effect on JSON.
    pub fn from_flags(json: bool, no_color: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text { color: !no_color }
        }
    }

    /// Build the formatter for this format
    pub fn formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Text { color } => Box::new(TextFormatter::with_color(color)),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}

/// Renders each subcommand's result
pub trait OutputFormatter {
    /// Outcome of `check`
    fn format_check(
        &self,
        result: &Result<UpdateDecision, CheckError>,
        writer: &mut dyn Write,
    ) -> std::io::Result<()>;

    /// Release listing of `versions`
    fn format_versions(
        &self,
        releases: &[ReleaseRecord],
        include_beta: bool,
        writer: &mut dyn Write,
    ) -> std::io::Result<()>;

    /// Installed/latest report of `info`
    fn format_info(&self, report: &VersionReport, writer: &mut dyn Write) -> std::io::Result<()>;

    /// This tool's own history for `history`
    fn format_history(
        &self,
        history: &[HistoryEntry],
        writer: &mut dyn Write,
    ) -> std::io::Result<()>;
}
