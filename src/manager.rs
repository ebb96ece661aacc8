//! Version manager for the meshtasticd daemon
//!
//! This module provides:
//! - Installed version lookup via `<daemon> --version` (cached per instance)
//! - Release listing from the release feed with draft/prerelease filtering
//! - Update decision: installed vs. latest stable by version precedence
//!
//! Every failure is absorbed here and turned into an absent result plus a
//! logged warning; nothing in this module is fatal to the caller.

use crate::command::{CommandRunner, SystemCommandRunner};
use crate::config::{Config, VERSION_ARG};
use crate::domain::{
    extract_version, parse_version, version_precedence, FeedEntry, ReleaseRecord, UpdateDecision,
    VersionReport,
};
use crate::error::{AppError, CheckError};
use crate::feed::{GitHubReleaseFeed, HttpClient, ReleaseFeed};
use tracing::{debug, warn};

/// Tracks the installed daemon version against published releases
pub struct VersionManager<R = SystemCommandRunner, F = GitHubReleaseFeed> {
    /// Runs the daemon's version command
    runner: R,
    /// Source of published releases
    feed: F,
    /// Daemon executable
    daemon: String,
    /// Installed version, once found
    current_version: Option<String>,
}

impl VersionManager {
    /// Create a manager for the real daemon and GitHub feed described by `config`
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        config.validate()?;
        let client = HttpClient::with_config(config.timeout, &config.user_agent)?;
        let feed = GitHubReleaseFeed::new(client, config.releases_url.clone());
        Ok(Self::new(
            SystemCommandRunner::new(),
            feed,
            config.daemon.clone(),
        ))
    }
}

impl<R: CommandRunner, F: ReleaseFeed> VersionManager<R, F> {
    /// Create a manager from explicit collaborators
    pub fn new(runner: R, feed: F, daemon: impl Into<String>) -> Self {
        Self {
            runner,
            feed,
            daemon: daemon.into(),
            current_version: None,
        }
    }

    /// The daemon executable being queried
    pub fn daemon(&self) -> &str {
        &self.daemon
    }

    /// Installed version found by an earlier lookup, if any
    pub fn cached_version(&self) -> Option<&str> {
        self.current_version.as_deref()
    }

    /// Forget the cached installed version
    pub fn clear_cache(&mut self) {
        self.current_version = None;
    }

    /// Get the installed daemon version.
    ///
    /// Returns `None` when the command cannot be run, exits unsuccessfully,
    /// or prints nothing that parses as a version. Only successful lookups
    /// are cached.
    pub fn get_installed_version(&mut self) -> Option<String> {
        if let Some(version) = &self.current_version {
            return Some(version.clone());
        }

        let output = match self.runner.run(&self.daemon, &[VERSION_ARG]) {
            Ok(output) => output,
            Err(e) => {
                debug!("Installed version lookup failed: {}", e);
                return None;
            }
        };

        match extract_version(&output.stdout) {
            Some(version) => {
                debug!("Installed {} version: {}", self.daemon, version);
                self.current_version = Some(version.clone());
                Some(version)
            }
            None => {
                debug!(
                    "No version token in output of '{}': {:?}",
                    output.command,
                    output.stdout.trim()
                );
                None
            }
        }
    }

    /// Get published releases in feed order.
    ///
    /// Drafts are always dropped; prereleases only when `include_beta` is
    /// false. A feed failure is logged and yields an empty list.
    pub async fn get_available_versions(&self, include_beta: bool) -> Vec<ReleaseRecord> {
        debug!("Fetching available versions from {}", self.feed.source());

        match self.feed.fetch_releases().await {
            Ok(entries) => filter_releases(entries, include_beta),
            Err(e) => {
                warn!("Could not fetch versions: {}", e);
                Vec::new()
            }
        }
    }

    /// Get the newest release (first in feed order) after filtering
    pub async fn get_latest_version(&self, include_beta: bool) -> Option<ReleaseRecord> {
        self.get_available_versions(include_beta)
            .await
            .into_iter()
            .next()
    }

    /// Check for an update, naming the step that failed when no decision
    /// can be made
    pub async fn try_check_for_updates(&mut self) -> Result<UpdateDecision, CheckError> {
        let current = self
            .get_installed_version()
            .ok_or(CheckError::InstalledUnknown)?;
        let latest = self
            .get_latest_version(false)
            .await
            .ok_or(CheckError::LatestUnknown)?;
        decide(current, latest)
    }

    /// Check for an update; `None` (with a logged warning) when undetermined
    pub async fn check_for_updates(&mut self) -> Option<UpdateDecision> {
        match self.try_check_for_updates().await {
            Ok(decision) => Some(decision),
            Err(e) => {
                warn!("{}", e);
                None
            }
        }
    }

    /// Collect installed version, latest stable, latest beta and the update
    /// decision with a single feed request
    pub async fn version_report(&mut self) -> VersionReport {
        let installed = self.get_installed_version();
        let releases = self.get_available_versions(true).await;

        let latest_stable = releases.iter().find(|r| !r.prerelease).cloned();
        let latest_beta = releases.first().filter(|r| r.prerelease).cloned();

        let decision = match (&installed, &latest_stable) {
            (Some(current), Some(latest)) => match decide(current.clone(), latest.clone()) {
                Ok(decision) => Some(decision),
                Err(e) => {
                    warn!("{}", e);
                    None
                }
            },
            _ => None,
        };

        VersionReport {
            installed,
            latest_stable,
            latest_beta,
            decision,
        }
    }
}

/// Drop drafts always and prereleases unless `include_beta`, keeping order
pub fn filter_releases(entries: Vec<FeedEntry>, include_beta: bool) -> Vec<ReleaseRecord> {
    entries
        .into_iter()
        .filter(|entry| !entry.draft)
        .map(|entry| entry.release)
        .filter(|release| include_beta || !release.prerelease)
        .collect()
}

/// Compare the installed version against a release by version precedence
pub fn decide(current: String, latest: ReleaseRecord) -> Result<UpdateDecision, CheckError> {
    let current_ver = parse_version(&current).ok_or_else(|| CheckError::InvalidVersion {
        version: current.clone(),
    })?;
    let latest_ver = parse_version(&latest.version).ok_or_else(|| CheckError::InvalidVersion {
        version: latest.version.clone(),
    })?;

    if version_precedence(&latest_ver, &current_ver).is_gt() {
        Ok(UpdateDecision::available(current, latest))
    } else {
        let latest_tag = latest.version;
        Ok(UpdateDecision::up_to_date(current, latest_tag))
    }
}
