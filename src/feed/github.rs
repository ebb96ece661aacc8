//! GitHub Releases API feed
//!
//! Fetches the release list for the daemon's firmware repository.
//! API endpoint: https://api.github.com/repos/{owner}/{repo}/releases
//!
//! GitHub returns releases newest first; that order is kept as-is.

use crate::domain::{FeedEntry, ReleaseRecord};
use crate::error::FeedError;
use crate::feed::{HttpClient, ReleaseFeed};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Media type recommended by the GitHub REST API
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Release element of the GitHub API response.
///
/// Every field tolerates `null` so one odd record cannot reject the feed.
#[derive(Debug, Deserialize)]
struct GithubRelease {
    #[serde(default)]
    tag_name: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    prerelease: Option<bool>,
    #[serde(default)]
    draft: Option<bool>,
    #[serde(default)]
    published_at: Option<String>,
    #[serde(default)]
    html_url: Option<String>,
}

impl From<GithubRelease> for FeedEntry {
    fn from(release: GithubRelease) -> Self {
        let published_at = release
            .published_at
            .as_deref()
            .and_then(|s| s.parse::<DateTime<Utc>>().ok());

        let tag = release.tag_name.unwrap_or_default();

        FeedEntry {
            draft: release.draft.unwrap_or(false),
            release: ReleaseRecord {
                name: release.name.unwrap_or_else(|| tag.clone()),
                version: tag,
                prerelease: release.prerelease.unwrap_or(false),
                published_at,
                url: release.html_url.unwrap_or_default(),
            },
        }
    }
}

/// GitHub Releases feed
pub struct GitHubReleaseFeed {
    client: HttpClient,
    url: String,
}

impl GitHubReleaseFeed {
    /// Create a feed reading the given releases endpoint
    pub fn new(client: HttpClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl ReleaseFeed for GitHubReleaseFeed {
    fn source(&self) -> &str {
        &self.url
    }

    async fn fetch_releases(&self) -> Result<Vec<FeedEntry>, FeedError> {
        let releases: Vec<GithubRelease> = self.client.get_json(&self.url, GITHUB_ACCEPT).await?;
        Ok(releases.into_iter().map(FeedEntry::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use mockito::Server;

    const RELEASES_PATH: &str = "/repos/meshtastic/firmware/releases";

    fn feed_for(server: &Server) -> GitHubReleaseFeed {
        GitHubReleaseFeed::new(
            HttpClient::new().unwrap(),
            format!("{}{}", server.url(), RELEASES_PATH),
        )
    }

    #[test]
    fn test_source_is_url() {
        let feed = GitHubReleaseFeed::new(HttpClient::new().unwrap(), "https://example.com/r");
        assert_eq!(feed.source(), "https://example.com/r");
    }

    #[test]
    fn test_conversion_defaults_missing_fields() {
        let release: GithubRelease = serde_json::from_str(r#"{"tag_name": "v2.4.0"}"#).unwrap();
        let entry = FeedEntry::from(release);
        assert!(!entry.draft);
        assert_eq!(entry.release.version, "v2.4.0");
        assert_eq!(entry.release.name, "v2.4.0");
        assert!(!entry.release.prerelease);
        assert!(entry.release.published_at.is_none());
        assert_eq!(entry.release.url, "");
    }

    #[test]
    fn test_conversion_null_name_falls_back_to_tag() {
        let release: GithubRelease =
            serde_json::from_str(r#"{"tag_name": "v2.4.0", "name": null}"#).unwrap();
        assert_eq!(FeedEntry::from(release).release.name, "v2.4.0");
    }

    #[test]
    fn test_conversion_null_flags_and_tag() {
        let release: GithubRelease = serde_json::from_str(
            r#"{"tag_name": null, "name": null, "prerelease": null, "draft": null}"#,
        )
        .unwrap();
        let entry = FeedEntry::from(release);
        assert!(!entry.draft);
        assert!(!entry.release.prerelease);
        assert_eq!(entry.release.version, "");
        assert_eq!(entry.release.name, "");
    }

    #[tokio::test]
    async fn fetch_releases_keeps_feed_with_null_fields() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", RELEASES_PATH)
            .with_status(200)
            .with_body(
                r#"[
                    {"tag_name": "v2.6.0", "prerelease": null, "draft": null},
                    {"tag_name": null, "prerelease": false, "draft": false},
                    {"tag_name": "v2.5.6", "prerelease": true, "draft": false}
                ]"#,
            )
            .create_async()
            .await;

        let entries = feed_for(&server).fetch_releases().await.unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].release.version, "v2.6.0");
        assert!(!entries[0].release.prerelease);
        assert!(!entries[0].draft);
        assert_eq!(entries[1].release.version, "");
        assert!(entries[2].release.prerelease);
    }

    #[test]
    fn test_conversion_unparseable_timestamp() {
        let release: GithubRelease =
            serde_json::from_str(r#"{"tag_name": "v2.4.0", "published_at": "yesterday"}"#)
                .unwrap();
        assert!(FeedEntry::from(release).release.published_at.is_none());
    }

    #[tokio::test]
    async fn fetch_releases_keeps_feed_order_and_flags() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", RELEASES_PATH)
            .match_header("accept", GITHUB_ACCEPT)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"tag_name": "v2.6.0.aaaaaaa", "name": "Meshtastic Firmware 2.6.0 Alpha",
                     "prerelease": true, "draft": false,
                     "published_at": "2025-02-01T12:00:00Z",
                     "html_url": "https://github.com/meshtastic/firmware/releases/tag/v2.6.0.aaaaaaa"},
                    {"tag_name": "v2.5.9.bbbbbbb", "name": "Draft", "prerelease": false, "draft": true,
                     "published_at": null, "html_url": ""},
                    {"tag_name": "v2.5.6.ccccccc", "name": "Meshtastic Firmware 2.5.6 Beta",
                     "prerelease": false, "draft": false,
                     "published_at": "2024-10-10T08:30:00Z",
                     "html_url": "https://github.com/meshtastic/firmware/releases/tag/v2.5.6.ccccccc"}
                ]"#,
            )
            .create_async()
            .await;

        let entries = feed_for(&server).fetch_releases().await.unwrap();

        mock.assert_async().await;
        let tags: Vec<_> = entries.iter().map(|e| e.release.version.as_str()).collect();
        assert_eq!(
            tags,
            vec!["v2.6.0.aaaaaaa", "v2.5.9.bbbbbbb", "v2.5.6.ccccccc"]
        );
        assert!(entries[0].release.prerelease);
        assert!(entries[1].draft);
        assert_eq!(
            entries[2].release.published_at,
            Some(Utc.with_ymd_and_hms(2024, 10, 10, 8, 30, 0).unwrap())
        );
    }

    #[tokio::test]
    async fn fetch_releases_empty_list() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", RELEASES_PATH)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let entries = feed_for(&server).fetch_releases().await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn fetch_releases_rejects_non_array_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", RELEASES_PATH)
            .with_status(200)
            .with_body(r#"{"message": "Bad credentials"}"#)
            .create_async()
            .await;

        let result = feed_for(&server).fetch_releases().await;
        assert!(matches!(result, Err(FeedError::InvalidResponse { .. })));
    }
}
