//! Core domain models for meshver
//!
//! This module contains the fundamental types used throughout the application:
//! - Version parsing and precedence comparison
//! - Release records from the release feed
//! - Update decisions and the combined version report
//! - The tool's own release history

mod decision;
mod history;
mod release;
mod version;

pub use decision::{UpdateDecision, VersionReport};
pub use history::{current_version, full_version, HistoryEntry, VERSION_HISTORY};
pub use release::{FeedEntry, ReleaseRecord};
pub use version::{
    compare_versions, extract_version, parse_version, strip_v, version_precedence,
};
