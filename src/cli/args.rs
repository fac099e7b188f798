//! Command-line argument parsing for bookdeck.
//!
//! Flags are few, so parsing is a single pass over `std::env::args()`.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::{DashboardConfig, StoreBackend};

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the dashboard with these overrides (default)
    Run(CliOverrides),
}

/// Settings given on the command line; they win over the environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub backend: Option<StoreBackend>,
    pub api_url: Option<String>,
    pub snapshot_path: Option<PathBuf>,
    pub no_refresh: bool,
}

impl CliOverrides {
    /// Overlay these flags on `config`.
    ///
    /// `--snapshot` implies the in-memory store unless `--remote` was given.
    pub fn apply(&self, mut config: DashboardConfig) -> DashboardConfig {
        if let Some(path) = &self.snapshot_path {
            config.snapshot_path = Some(path.clone());
            config.backend = StoreBackend::Memory;
        }
        if let Some(backend) = self.backend {
            config.backend = backend;
        }
        if let Some(url) = &self.api_url {
            config.api_url = url.clone();
        }
        if self.no_refresh {
            config.refresh_after_mutation = Some(false);
        }
        config
    }
}

/// Arguments that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("unknown argument '{0}' (try --help)")]
    Unknown(String),
    #[error("{0} requires a value")]
    MissingValue(&'static str),
}

/// Parse command-line arguments and return the appropriate command.
///
/// `--version` and `--help` win over everything else on the line.
///
/// # Examples
///
/// ```
/// use bookdeck::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["bookdeck".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut overrides = CliOverrides::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--memory" => overrides.backend = Some(StoreBackend::Memory),
            "--remote" => overrides.backend = Some(StoreBackend::Remote),
            "--no-refresh" => overrides.no_refresh = true,
            "--url" => {
                let url = args.next().ok_or(ArgsError::MissingValue("--url"))?;
                overrides.api_url = Some(url);
            }
            "--snapshot" => {
                let path = args.next().ok_or(ArgsError::MissingValue("--snapshot"))?;
                overrides.snapshot_path = Some(PathBuf::from(path));
            }
            other => {
                if let Some(url) = other.strip_prefix("--url=") {
                    overrides.api_url = Some(url.to_string());
                } else if let Some(path) = other.strip_prefix("--snapshot=") {
                    overrides.snapshot_path = Some(PathBuf::from(path));
                } else {
                    return Err(ArgsError::Unknown(other.to_string()));
                }
            }
        }
    }

    Ok(CliCommand::Run(overrides))
}
