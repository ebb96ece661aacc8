//! Release feeds for fetching published daemon versions
//!
//! This module provides:
//! - HTTP client shared foundation
//! - GitHub Releases API feed

mod client;
mod github;

pub use client::HttpClient;
pub use github::GitHubReleaseFeed;

use crate::domain::FeedEntry;
use crate::error::FeedError;
use async_trait::async_trait;

/// Trait for release feeds
#[async_trait]
pub trait ReleaseFeed: Send + Sync {
    /// Where the releases come from, for log messages
    fn source(&self) -> &str;

    /// Fetch every entry in feed order, drafts and prereleases included
    async fn fetch_releases(&self) -> Result<Vec<FeedEntry>, FeedError>;
}
