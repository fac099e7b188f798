//! Dashboard configuration.
//!
//! Values come from defaults, then `BOOKDECK_*` environment variables, then
//! command-line flags (see [`crate::cli::CliOverrides`]).

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::store::DEFAULT_API_URL;

pub const ENV_STORE: &str = "BOOKDECK_STORE";
pub const ENV_API_URL: &str = "BOOKDECK_API_URL";
pub const ENV_SNAPSHOT: &str = "BOOKDECK_SNAPSHOT";
pub const ENV_TIMEOUT_SECS: &str = "BOOKDECK_TIMEOUT_SECS";
pub const ENV_LOG_FILE: &str = "BOOKDECK_LOG_FILE";

/// Default per-request timeout for the remote store.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Which [`BookStore`](crate::store::BookStore) to run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    #[default]
    Remote,
    Memory,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::Remote => "remote",
            StoreBackend::Memory => "memory",
        }
    }
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remote" | "http" => Ok(StoreBackend::Remote),
            "memory" | "mem" | "local" => Ok(StoreBackend::Memory),
            _ => Err(ConfigError::InvalidValue {
                var: ENV_STORE,
                value: s.to_string(),
            }),
        }
    }
}

/// A configuration value could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    InvalidValue { var: &'static str, value: String },
}

/// Runtime configuration of the dashboard.
///
/// # Example
///
/// ```ignore
/// use bookdeck::config::{DashboardConfig, StoreBackend};
///
/// let config = DashboardConfig::new()
///     .with_backend(StoreBackend::Memory)
///     .with_refresh_after_mutation(false);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub backend: StoreBackend,
    /// Collection endpoint of the remote store
    pub api_url: String,
    /// Snapshot for the in-memory store; the bundled catalog when `None`
    pub snapshot_path: Option<PathBuf>,
    pub request_timeout_secs: u64,
    /// Re-list the store after each successful mutation. `None` means the
    /// backend's default.
    pub refresh_after_mutation: Option<bool>,
    /// Log file; `None` means [`default_log_path`]
    pub log_path: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Remote,
            api_url: DEFAULT_API_URL.to_string(),
            snapshot_path: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            refresh_after_mutation: None,
            log_path: None,
        }
    }
}

impl DashboardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_backend(mut self, backend: StoreBackend) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = Some(path.into());
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn with_refresh_after_mutation(mut self, refresh: bool) -> Self {
        self.refresh_after_mutation = Some(refresh);
        self
    }

    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    /// Whether successful mutations trigger a reload.
    ///
    /// Defaults to on for the remote store, whose server may rewrite records,
    /// and off for the in-memory store.
    pub fn refresh_after_mutation(&self) -> bool {
        self.refresh_after_mutation
            .unwrap_or(self.backend == StoreBackend::Remote)
    }

    /// Resolved log file location.
    pub fn log_path(&self) -> PathBuf {
        self.log_path.clone().unwrap_or_else(default_log_path)
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with the variables `lookup` returns.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get(ENV_STORE) {
            config.backend = value.parse()?;
        }
        if let Some(url) = get(ENV_API_URL) {
            config.api_url = url.trim().to_string();
        }
        if let Some(path) = get(ENV_SNAPSHOT) {
            config.snapshot_path = Some(PathBuf::from(path));
        }
        if let Some(value) = get(ENV_TIMEOUT_SECS) {
            config.request_timeout_secs = value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidValue {
                    var: ENV_TIMEOUT_SECS,
                    value,
                })?;
        }
        if let Some(path) = get(ENV_LOG_FILE) {
            config.log_path = Some(PathBuf::from(path));
        }

        Ok(config)
    }
}

/// `<data dir>/bookdeck/bookdeck.log`, or the temp dir when no data dir exists.
pub fn default_log_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("bookdeck")
        .join("bookdeck.log")
}
