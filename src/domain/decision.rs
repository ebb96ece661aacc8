//! Update decision and version report types

use super::ReleaseRecord;
use serde::Serialize;

/// Outcome of comparing the installed version against the latest release
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateDecision {
    /// Whether the latest release is newer than the installed version
    pub update_available: bool,
    /// Installed version
    pub current: String,
    /// Latest release tag
    pub latest: String,
    /// Full release record, present only when an update is available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_info: Option<ReleaseRecord>,
}

impl UpdateDecision {
    /// A newer release exists
    pub fn available(current: impl Into<String>, release: ReleaseRecord) -> Self {
        Self {
            update_available: true,
            current: current.into(),
            latest: release.version.clone(),
            release_info: Some(release),
        }
    }

    /// Installed version is current (or newer than the feed)
    pub fn up_to_date(current: impl Into<String>, latest: impl Into<String>) -> Self {
        Self {
            update_available: false,
            current: current.into(),
            latest: latest.into(),
            release_info: None,
        }
    }
}

/// Everything the `info` view shows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VersionReport {
    /// Installed daemon version
    pub installed: Option<String>,
    /// Newest stable release
    pub latest_stable: Option<ReleaseRecord>,
    /// Newest release overall, only when it is a prerelease
    pub latest_beta: Option<ReleaseRecord>,
    /// Update decision, when one could be made
    pub decision: Option<UpdateDecision>,
}

impl VersionReport {
    /// Whether the report says an update is available
    pub fn update_available(&self) -> bool {
        self.decision
            .as_ref()
            .is_some_and(|decision| decision.update_available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available() {
        let decision = UpdateDecision::available("2.3.0", ReleaseRecord::new("2.4.0"));
        assert!(decision.update_available);
        assert_eq!(decision.current, "2.3.0");
        assert_eq!(decision.latest, "2.4.0");
        assert_eq!(decision.release_info.unwrap().version, "2.4.0");
    }

    #[test]
    fn test_up_to_date() {
        let decision = UpdateDecision::up_to_date("2.3.0", "2.3.0");
        assert!(!decision.update_available);
        assert!(decision.release_info.is_none());
    }

    #[test]
    fn test_up_to_date_omits_release_info_in_json() {
        let json = serde_json::to_value(UpdateDecision::up_to_date("2.3.0", "v2.3.0")).unwrap();
        assert_eq!(json["update_available"], false);
        assert!(json.get("release_info").is_none());
    }

    #[test]
    fn test_report_update_available() {
        let mut report = VersionReport::default();
        assert!(!report.update_available());

        report.decision = Some(UpdateDecision::available(
            "2.3.0",
            ReleaseRecord::new("2.4.0"),
        ));
        assert!(report.update_available());
    }
}
