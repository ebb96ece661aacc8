//! meshver - version and update checker for the meshtasticd daemon
//!
//! Reports the installed daemon version, lists published releases and
//! tells whether a newer stable release is available.

use clap::Parser;
use meshver::cli::{CliArgs, Command};
use meshver::config::Config;
use meshver::domain::{full_version, VERSION_HISTORY};
use meshver::output::OutputFormat;
use meshver::progress::FetchSpinner;
use meshver::VersionManager;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Exit code when no update decision could be made
const EXIT_UNDETERMINED: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr log subscriber; `RUST_LOG` wins over CLI verbosity
fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let config = Config::from_cli(&args)?;
    init_logging(&config);
    debug!("meshver {}", full_version());
    debug!("Daemon: {}, feed: {}", config.daemon, config.releases_url);

    let formatter = OutputFormat::from_flags(args.json, args.no_color).formatter();
    let spinner = FetchSpinner::new(!args.quiet && !args.json);
    let mut stdout = io::stdout().lock();

    let exit_code = match args.command() {
        Command::History => {
            formatter.format_history(VERSION_HISTORY, &mut stdout)?;
            ExitCode::SUCCESS
        }
        Command::Check => {
            let mut manager = VersionManager::from_config(&config)?;
            let result = spinner
                .run("Checking for updates...", manager.try_check_for_updates())
                .await;

            formatter.format_check(&result, &mut stdout)?;
            if result.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_UNDETERMINED)
            }
        }
        Command::Versions { beta, limit } => {
            let manager = VersionManager::from_config(&config)?;
            let mut releases = spinner
                .run(
                    "Fetching available versions...",
                    manager.get_available_versions(beta),
                )
                .await;

            releases.truncate(limit);
            formatter.format_versions(&releases, beta, &mut stdout)?;
            ExitCode::SUCCESS
        }
        Command::Info => {
            let mut manager = VersionManager::from_config(&config)?;
            let report = spinner
                .run("Gathering version information...", manager.version_report())
                .await;

            formatter.format_info(&report, &mut stdout)?;
            ExitCode::SUCCESS
        }
    };

    stdout.flush()?;
    Ok(exit_code)
}
