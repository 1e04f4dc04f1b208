//! Process configuration: log level and the storage driver to bind.
//!
//! The configuration is a versioned TOML document:
//!
//! ```toml
//! version = "1.0"
//!
//! [log]
//! level = "info"
//!
//! [storage]
//! driver = "sqlite"
//! path = "tinkersnest.db"
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The only configuration version understood by this build.
pub const CONFIG_VERSION: &str = "1.0";

/// Default log level when `[log]` is omitted.
pub const DEFAULT_LOG_LEVEL: &str = "debug";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("parsing configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("configuration version not specified")]
    MissingVersion,

    #[error("unsupported configuration version: {0}")]
    UnsupportedVersion(String),

    #[error("no storage configuration provided")]
    MissingStorage,

    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// Which storage driver to bind at startup, with its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "driver", rename_all = "lowercase")]
pub enum StorageConfig {
    /// Volatile in-process map.
    InMemory,
    /// SQLite database file.
    Sqlite { path: PathBuf },
}

impl StorageConfig {
    /// Registered name of the selected driver.
    pub fn driver_name(&self) -> &'static str {
        match self {
            StorageConfig::InMemory => "inmemory",
            StorageConfig::Sqlite { .. } => "sqlite",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LogConfig {
    /// Parse the configured level.
    pub fn level(&self) -> Result<tracing::Level, ConfigError> {
        tracing::Level::from_str(&self.level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.level.clone()))
    }
}

/// Validated process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log: LogConfig,
    pub storage: StorageConfig,
}

/// The document as written, before required sections are checked.
#[derive(Debug, Deserialize)]
struct RawConfig {
    version: Option<String>,
    #[serde(default)]
    log: LogConfig,
    storage: Option<StorageConfig>,
}

impl Config {
    /// Configuration for an in-memory store with default logging.
    pub fn in_memory() -> Self {
        Self {
            log: LogConfig::default(),
            storage: StorageConfig::InMemory,
        }
    }

    /// Parse a configuration document.
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(input)?;

        match raw.version.as_deref() {
            None => return Err(ConfigError::MissingVersion),
            Some(CONFIG_VERSION) => {}
            Some(other) => return Err(ConfigError::UnsupportedVersion(other.to_string())),
        }

        let storage = raw.storage.ok_or(ConfigError::MissingStorage)?;

        // Reject a bad level at load time rather than at logger setup
        raw.log.level()?;

        Ok(Self {
            log: raw.log,
            storage,
        })
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let input = std::fs::read_to_string(path)?;
        Self::parse(&input)
    }
}
