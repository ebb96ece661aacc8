//! Runtime configuration resolved from CLI arguments

use crate::cli::CliArgs;
use crate::error::ConfigError;
use std::time::Duration;

/// Daemon executable whose version is tracked
pub const DEFAULT_DAEMON: &str = "meshtasticd";

/// Argument that makes the daemon print its version
pub const VERSION_ARG: &str = "--version";

/// GitHub releases endpoint for the daemon's firmware repository
pub const DEFAULT_RELEASES_URL: &str = "https://api.github.com/repos/meshtastic/firmware/releases";

/// HTTP timeout for the release feed, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// User-Agent sent to the release feed (GitHub rejects requests without one)
pub const DEFAULT_USER_AGENT: &str = concat!("meshver/", env!("CARGO_PKG_VERSION"));

/// Resolved configuration for a VersionManager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Daemon executable
    pub daemon: String,
    /// Release feed URL
    pub releases_url: String,
    /// HTTP timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Verbose logging requested
    pub verbose: bool,
    /// Quiet mode requested
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            daemon: DEFAULT_DAEMON.to_string(),
            releases_url: DEFAULT_RELEASES_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            verbose: false,
            quiet: false,
        }
    }
}

impl Config {
    /// Build and validate configuration from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Result<Self, ConfigError> {
        if args.timeout == 0 {
            return Err(ConfigError::InvalidTimeout {
                value: args.timeout,
            });
        }

        let config = Self {
            daemon: args.daemon.clone(),
            releases_url: args.releases_url.clone(),
            timeout: Duration::from_secs(args.timeout),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            verbose: args.verbose,
            quiet: args.quiet,
        };
        config.validate()?;
        Ok(config)
    }

    /// Point the configuration at a different release feed
    pub fn with_releases_url(mut self, url: impl Into<String>) -> Self {
        self.releases_url = url.into();
        self
    }

    /// Use a different daemon executable
    pub fn with_daemon(mut self, daemon: impl Into<String>) -> Self {
        self.daemon = daemon.into();
        self
    }

    /// Check option consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quiet && self.verbose {
            return Err(ConfigError::ConflictingOptions {
                message: "--quiet and --verbose cannot be used together".to_string(),
            });
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout { value: 0 });
        }
        if !(self.releases_url.starts_with("http://") || self.releases_url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidUrl {
                url: self.releases_url.clone(),
            });
        }
        Ok(())
    }

    /// Default tracing filter directive for this configuration
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "meshver=debug"
        } else if self.quiet {
            "meshver=error"
        } else {
            "meshver=warn"
        }
    }
}
