//! JSON output formatter for machine processing

use crate::domain::{HistoryEntry, ReleaseRecord, UpdateDecision, VersionReport};
use crate::error::CheckError;
use crate::output::OutputFormatter;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }

    /// Serialize `value` as pretty JSON followed by a newline
    fn write<T: Serialize>(&self, value: &T, writer: &mut dyn Write) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, value)?;
        writeln!(writer)
    }
}

/// Status of an update check
#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum JsonCheckStatus {
    UpdateAvailable,
    UpToDate,
    Unknown,
}

/// JSON representation of an update check
#[derive(Serialize)]
struct JsonCheck<'a> {
    status: JsonCheckStatus,
    #[serde(flatten)]
    decision: Option<&'a UpdateDecision>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// JSON representation of a release listing
#[derive(Serialize)]
struct JsonVersions<'a> {
    include_beta: bool,
    versions: &'a [ReleaseRecord],
}

impl OutputFormatter for JsonFormatter {
    fn format_check(
        &self,
        result: &Result<UpdateDecision, CheckError>,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let output = match result {
            Ok(decision) => JsonCheck {
                status: if decision.update_available {
                    JsonCheckStatus::UpdateAvailable
                } else {
                    JsonCheckStatus::UpToDate
                },
                decision: Some(decision),
                error: None,
            },
            Err(e) => JsonCheck {
                status: JsonCheckStatus::Unknown,
                decision: None,
                error: Some(e.to_string()),
            },
        };
        self.write(&output, writer)
    }

    fn format_versions(
        &self,
        releases: &[ReleaseRecord],
        include_beta: bool,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        self.write(
            &JsonVersions {
                include_beta,
                versions: releases,
            },
            writer,
        )
    }

    fn format_info(&self, report: &VersionReport, writer: &mut dyn Write) -> std::io::Result<()> {
        self.write(report, writer)
    }

    fn format_history(
        &self,
        history: &[HistoryEntry],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        self.write(&history, writer)
    }
}
