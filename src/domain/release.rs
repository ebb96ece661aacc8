//! Release records from the remote release feed

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published release of the daemon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRecord {
    /// Version tag as published (e.g., "v2.5.6.d55c08d")
    pub version: String,
    /// Display name (falls back to the tag)
    pub name: String,
    /// Whether the release is marked as a prerelease (beta)
    pub prerelease: bool,
    /// Publication time, when the feed provided a parseable one
    pub published_at: Option<DateTime<Utc>>,
    /// Release page URL
    pub url: String,
}

impl ReleaseRecord {
    /// Create a stable release record with only a tag
    pub fn new(version: impl Into<String>) -> Self {
        let version = version.into();
        Self {
            name: version.clone(),
            version,
            prerelease: false,
            published_at: None,
            url: String::new(),
        }
    }

    /// Mark as prerelease
    pub fn with_prerelease(mut self, prerelease: bool) -> Self {
        self.prerelease = prerelease;
        self
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the publication time
    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    /// Set the release page URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// "Beta" or "Stable"
    pub fn channel(&self) -> &'static str {
        if self.prerelease {
            "Beta"
        } else {
            "Stable"
        }
    }

    /// Publication date as YYYY-MM-DD, empty when unknown
    pub fn released_on(&self) -> String {
        self.published_at
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

/// One element of the release feed: a release plus its draft flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    /// The release itself
    pub release: ReleaseRecord,
    /// Unpublished draft
    pub draft: bool,
}

impl FeedEntry {
    /// Wrap a published (non-draft) release
    pub fn published(release: ReleaseRecord) -> Self {
        Self {
            release,
            draft: false,
        }
    }

    /// Wrap a draft release
    pub fn draft(release: ReleaseRecord) -> Self {
        Self {
            release,
            draft: true,
        }
    }
}
