//! Application error types using thiserror
//!
//! Error hierarchy:
//! - FeedError: Issues with release feed communication
//! - CommandError: Issues running the daemon's version command
//! - ConfigError: Issues with CLI configuration
//! - CheckError: Which step of an update check could not complete

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Release feed related errors
    #[error(transparent)]
    Feed(#[from] FeedError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to the remote release feed
#[derive(Error, Debug)]
pub enum FeedError {
    /// Failed to build the HTTP client
    #[error("failed to create HTTP client: {message}")]
    ClientBuild { message: String },

    /// Transport-level failure
    #[error("failed to fetch releases from {url}: {message}")]
    Network { url: String, message: String },

    /// Request exceeded the configured timeout
    #[error("timeout while fetching releases from {url}")]
    Timeout { url: String },

    /// Endpoint does not exist
    #[error("release feed not found: {url}")]
    NotFound { url: String },

    /// Rate limit exceeded
    #[error("rate limit exceeded for {url}")]
    RateLimited {
        url: String,
        retry_after_secs: Option<u64>,
    },

    /// Any other non-success status
    #[error("release feed {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// Body was not the expected JSON
    #[error("invalid response from {url}: {message}")]
    InvalidResponse { url: String, message: String },
}

/// Errors related to running the daemon's version command
#[derive(Error, Debug)]
pub enum CommandError {
    /// The program could not be started (usually: not installed)
    #[error("failed to execute '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The program ran but exited unsuccessfully
    #[error("'{command}' exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Conflicting options
    #[error("conflicting options: {message}")]
    ConflictingOptions { message: String },

    /// Timeout out of range
    #[error("invalid timeout '{value}': must be at least 1 second")]
    InvalidTimeout { value: u64 },

    /// Release feed URL is not http(s)
    #[error("invalid releases URL '{url}': expected an http:// or https:// URL")]
    InvalidUrl { url: String },
}

/// Reasons an update check could not produce a decision
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// Installed version could not be determined
    #[error("could not determine installed version")]
    InstalledUnknown,

    /// No stable release could be found in the feed
    #[error("could not determine latest version")]
    LatestUnknown,

    /// One of the two versions is not comparable
    #[error("cannot compare versions: '{version}' is not a valid version")]
    InvalidVersion { version: String },
}

impl FeedError {
    /// Creates a new Network error
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        FeedError::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(url: impl Into<String>) -> Self {
        FeedError::Timeout { url: url.into() }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(url: impl Into<String>, message: impl Into<String>) -> Self {
        FeedError::InvalidResponse {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Maps a reqwest transport error, separating timeouts
    pub fn from_reqwest(url: &str, err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::timeout(url)
        } else if err.is_decode() {
            Self::invalid_response(url, err.to_string())
        } else {
            Self::network(url, err.to_string())
        }
    }
}

impl CommandError {
    /// Creates a new Spawn error
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        CommandError::Spawn {
            command: command.into(),
            source,
        }
    }

    /// Creates a new Failed error
    pub fn failed(
        command: impl Into<String>,
        status: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        CommandError::Failed {
            command: command.into(),
            status: status.into(),
            stderr: stderr.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_error_network() {
        let err = FeedError::network("https://example.com/releases", "connection refused");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to fetch releases"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_feed_error_timeout() {
        let err = FeedError::timeout("https://example.com/releases");
        let msg = format!("{}", err);
        assert!(msg.contains("timeout"));
        assert!(msg.contains("example.com"));
    }

    #[test]
    fn test_feed_error_http_status() {
        let err = FeedError::HttpStatus {
            url: "https://example.com".to_string(),
            status: 502,
        };
        assert!(format!("{}", err).contains("HTTP 502"));
    }

    #[test]
    fn test_command_error_spawn() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file");
        let err = CommandError::spawn("meshtasticd --version", io);
        let msg = format!("{}", err);
        assert!(msg.contains("failed to execute 'meshtasticd --version'"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn test_command_error_failed() {
        let err = CommandError::failed("meshtasticd --version", "exit status: 1", "boom");
        let msg = format!("{}", err);
        assert!(msg.contains("exit status: 1"));
        assert!(msg.contains("boom"));
    }

    #[test]
    fn test_config_error_conflicting_options() {
        let err = ConfigError::ConflictingOptions {
            message: "--quiet and --verbose cannot be used together".to_string(),
        };
        assert!(format!("{}", err).contains("conflicting options"));
    }

    #[test]
    fn test_check_error_messages() {
        assert_eq!(
            CheckError::InstalledUnknown.to_string(),
            "could not determine installed version"
        );
        assert_eq!(
            CheckError::LatestUnknown.to_string(),
            "could not determine latest version"
        );
        let err = CheckError::InvalidVersion {
            version: "nightly".to_string(),
        };
        assert!(err.to_string().contains("'nightly'"));
    }

    #[test]
    fn test_app_error_from_feed_error() {
        let app_err: AppError = FeedError::timeout("https://x").into();
        assert!(format!("{}", app_err).contains("timeout"));
    }

    #[test]
    fn test_app_error_from_config_error() {
        let app_err: AppError = ConfigError::InvalidTimeout { value: 0 }.into();
        assert!(format!("{}", app_err).contains("invalid timeout"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = FeedError::timeout("https://x");
        assert!(format!("{:?}", err).contains("Timeout"));
    }
}
