//! Release history of meshver itself

use serde::Serialize;

/// One entry in the tool's release history
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// Release version, without a `v`
    pub version: &'static str,
    /// Release date as YYYY-MM-DD
    pub date: &'static str,
    /// Notable changes, most important first
    pub changes: &'static [&'static str],
}

/// Newest first. The first entry must match the crate version.
pub const VERSION_HISTORY: &[HistoryEntry] = &[
    HistoryEntry {
        version: "0.3.0",
        date: "2026-10-12",
        changes: &[
            "Add `info` view with latest stable and latest beta releases",
            "Add JSON output for every command",
            "Parse firmware tags carrying a commit hash (v2.5.6.d55c08d)",
            "Ignore build metadata when comparing versions",
            "Add `history` command",
        ],
    },
    HistoryEntry {
        version: "0.2.0",
        date: "2026-09-28",
        changes: &[
            "Add `versions` command with --beta and --limit",
            "Configurable release feed URL and HTTP timeout",
        ],
    },
    HistoryEntry {
        version: "0.1.0",
        date: "2026-09-14",
        changes: &[
            "Initial release",
            "Installed version detection via `meshtasticd --version`",
            "Update check against GitHub releases",
        ],
    },
];

/// The tool's current version string
pub fn current_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Current version with its release date, when the history knows it
pub fn full_version() -> String {
    match VERSION_HISTORY
        .iter()
        .find(|entry| entry.version == current_version())
    {
        Some(entry) => format!("{} ({})", entry.version, entry.date),
        None => current_version().to_string(),
    }
}
