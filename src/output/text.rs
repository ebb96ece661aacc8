//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Update check result with the kind of version change (major/minor/patch)
//! - Release tables for `versions` and `info`
//! - Tool version history

use crate::domain::{parse_version, HistoryEntry, ReleaseRecord, UpdateDecision, VersionReport};
use crate::error::CheckError;
use crate::output::OutputFormatter;
use colored::{ColoredString, Colorize};
use std::io::Write;

/// Changes listed per history entry before collapsing the rest
const HISTORY_CHANGES_SHOWN: usize = 3;

/// Semantic version change type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionChangeType {
    /// Major version change (breaking)
    Major,
    /// Minor version change (features)
    Minor,
    /// Patch version change (fixes)
    Patch,
    /// Unknown or unparseable
    Unknown,
}

impl VersionChangeType {
    /// Determine the change type between two versions
    pub fn from_versions(old: &str, new: &str) -> Self {
        match (parse_version(old), parse_version(new)) {
            (Some(old), Some(new)) => {
                if new.major != old.major {
                    VersionChangeType::Major
                } else if new.minor != old.minor {
                    VersionChangeType::Minor
                } else {
                    VersionChangeType::Patch
                }
            }
            _ => VersionChangeType::Unknown,
        }
    }

    /// Get the display label with color
    pub fn colored_label(&self) -> String {
        match self {
            VersionChangeType::Major => "major".red().bold().to_string(),
            VersionChangeType::Minor => "minor".yellow().to_string(),
            VersionChangeType::Patch => "patch".green().to_string(),
            VersionChangeType::Unknown => "?".dimmed().to_string(),
        }
    }

    /// Get the plain label
    pub fn label(&self) -> &'static str {
        match self {
            VersionChangeType::Major => "major",
            VersionChangeType::Minor => "minor",
            VersionChangeType::Patch => "patch",
            VersionChangeType::Unknown => "?",
        }
    }
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter with colors
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Create a new text formatter with color option
    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    /// Apply a style only when colors are enabled
    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Write a section heading
    fn heading(&self, title: &str, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer, "{}", self.paint(title, |s| s.cyan().bold()))?;
        writeln!(writer)
    }

    /// Write rows as left-aligned columns sized to the widest cell.
    ///
    /// Styling is applied after padding so escape codes do not skew widths.
    fn table(
        &self,
        header: &[&str],
        rows: &[Vec<String>],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let pad = |cell: &str, width: usize| format!("{:width$}", cell, width = width);

        let header_line: Vec<String> = header
            .iter()
            .zip(&widths)
            .map(|(h, w)| self.paint(&pad(h, *w), |s| s.magenta().bold()))
            .collect();
        writeln!(writer, "  {}", header_line.join("  ").trim_end())?;

        for row in rows {
            let line: Vec<String> = row
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, (cell, w))| {
                    let padded = pad(cell, *w);
                    if i == 0 {
                        self.paint(&padded, |s| s.bright_white())
                    } else {
                        padded
                    }
                })
                .collect();
            writeln!(writer, "  {}", line.join("  ").trim_end())?;
        }

        Ok(())
    }

    /// Write the "update available" block
    fn format_update(
        &self,
        decision: &UpdateDecision,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let change_type = VersionChangeType::from_versions(&decision.current, &decision.latest);

        if self.color {
            writeln!(
                writer,
                "{} {} {} {} [{}]",
                "Update available:".green().bold(),
                decision.current.dimmed(),
                "→".dimmed(),
                decision.latest.bright_white().bold(),
                change_type.colored_label()
            )?;
        } else {
            writeln!(
                writer,
                "Update available: {} -> {} [{}]",
                decision.current,
                decision.latest,
                change_type.label()
            )?;
        }

        if let Some(release) = &decision.release_info {
            let released = release.released_on();
            if released.is_empty() {
                writeln!(writer, "  Release: {}", release.name)?;
            } else {
                writeln!(writer, "  Release: {} ({})", release.name, released)?;
            }
            if !release.url.is_empty() {
                writeln!(writer, "  {}", self.paint(&release.url, |s| s.blue()))?;
            }
        }

        Ok(())
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TextFormatter {
    fn format_check(
        &self,
        result: &Result<UpdateDecision, CheckError>,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        match result {
            Ok(decision) if decision.update_available => self.format_update(decision, writer),
            Ok(decision) => writeln!(
                writer,
                "{}",
                self.paint(
                    &format!("You're running the latest version ({})", decision.current),
                    |s| s.green()
                )
            ),
            Err(e) => writeln!(
                writer,
                "{}",
                self.paint(&format!("Could not check for updates: {}", e), |s| {
                    s.yellow()
                })
            ),
        }
    }

    fn format_versions(
        &self,
        releases: &[ReleaseRecord],
        include_beta: bool,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let title = if include_beta {
            "Available Versions (including beta)"
        } else {
            "Available Versions"
        };
        self.heading(title, writer)?;

        if releases.is_empty() {
            return writeln!(writer, "{}", self.paint("No versions found", |s| s.yellow()));
        }

        let rows: Vec<Vec<String>> = releases
            .iter()
            .map(|r| {
                vec![
                    r.version.clone(),
                    r.name.clone(),
                    r.channel().to_string(),
                    r.released_on(),
                ]
            })
            .collect();

        self.table(&["Version", "Name", "Type", "Released"], &rows, writer)
    }

    fn format_info(&self, report: &VersionReport, writer: &mut dyn Write) -> std::io::Result<()> {
        self.heading("Version Information", writer)?;

        let mut rows = Vec::new();
        match &report.installed {
            Some(installed) => rows.push(vec![
                "Installed".to_string(),
                installed.clone(),
                String::new(),
            ]),
            None => rows.push(vec![
                "Installed".to_string(),
                "Not found".to_string(),
                "Not installed".to_string(),
            ]),
        }
        if let Some(stable) = &report.latest_stable {
            rows.push(vec![
                "Latest Stable".to_string(),
                stable.version.clone(),
                String::new(),
            ]);
        }
        if let Some(beta) = &report.latest_beta {
            rows.push(vec![
                "Latest Beta".to_string(),
                beta.version.clone(),
                "Prerelease".to_string(),
            ]);
        }

        self.table(&["Type", "Version", "Status"], &rows, writer)?;

        if report.installed.is_none() {
            return Ok(());
        }

        writeln!(writer)?;
        match &report.decision {
            Some(decision) if decision.update_available => {
                self.format_update(decision, writer)?;
                writeln!(writer, "Run the installer's update to upgrade")
            }
            Some(_) => writeln!(
                writer,
                "{}",
                self.paint("You are running the latest version", |s| s.green())
            ),
            None => writeln!(
                writer,
                "{}",
                self.paint("Could not determine update status", |s| s.yellow())
            ),
        }
    }

    fn format_history(
        &self,
        history: &[HistoryEntry],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        self.heading("Version History", writer)?;

        for entry in history {
            writeln!(
                writer,
                "{}  {}",
                self.paint(&format!("{:<8}", entry.version), |s| s.cyan()),
                self.paint(entry.date, |s| s.green())
            )?;
            for change in entry.changes.iter().take(HISTORY_CHANGES_SHOWN) {
                writeln!(writer, "  - {}", change)?;
            }
            if entry.changes.len() > HISTORY_CHANGES_SHOWN {
                writeln!(
                    writer,
                    "  ... and {} more",
                    entry.changes.len() - HISTORY_CHANGES_SHOWN
                )?;
            }
        }

        Ok(())
    }
}
