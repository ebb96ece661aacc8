//! CLI argument parsing module for meshver

use crate::config::{DEFAULT_DAEMON, DEFAULT_RELEASES_URL, DEFAULT_TIMEOUT_SECS};
use clap::{Parser, Subcommand};

/// Default number of releases shown by `versions`
pub const DEFAULT_VERSIONS_LIMIT: usize = 10;

/// Version and update checker for meshtasticd
#[derive(Parser, Debug, Clone)]
#[command(
    name = "meshver",
    version,
    about = "Check installed and available meshtasticd versions"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Daemon executable queried with --version
    #[arg(long, global = true, env = "MESHVER_DAEMON", default_value = DEFAULT_DAEMON)]
    pub daemon: String,

    /// Release feed endpoint (GitHub releases API)
    #[arg(
        long,
        global = true,
        env = "MESHVER_RELEASES_URL",
        default_value = DEFAULT_RELEASES_URL
    )]
    pub releases_url: String,

    /// HTTP timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    // Output options
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode - no spinner, only errors logged
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Check whether a newer stable release is available (default)
    Check,

    /// List releases available from the release feed
    Versions {
        /// Include beta (prerelease) versions
        #[arg(long)]
        beta: bool,

        /// Maximum number of releases to show
        #[arg(long, default_value_t = DEFAULT_VERSIONS_LIMIT)]
        limit: usize,
    },

    /// Show installed, latest stable and latest beta versions
    Info,

    /// Show this tool's own version history
    History,
}

impl CliArgs {
    /// The subcommand to run, `check` when none was given
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Check)
    }
}
