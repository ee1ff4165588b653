//! Process configuration read from the environment.

use std::path::PathBuf;

use stockroom_observability::LogFormat;
use thiserror::Error;

pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";
pub const SNAPSHOT_DIR_VAR: &str = "STOCKROOM_SNAPSHOT_DIR";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid STOCKROOM_LOG_FORMAT: {0}")]
    InvalidLogFormat(String),

    #[error("STOCKROOM_SNAPSHOT_DIR is set but empty")]
    EmptySnapshotDir,
}

/// Runtime settings for the `stockroom` binary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarehouseConfig {
    pub log_format: LogFormat,
    /// When set, both categories are exported as JSON snapshots here.
    pub snapshot_dir: Option<PathBuf>,
}

impl WarehouseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse().map_err(ConfigError::InvalidLogFormat)?,
            None => LogFormat::default(),
        };

        let snapshot_dir = match lookup(SNAPSHOT_DIR_VAR) {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptySnapshotDir),
            Some(raw) => Some(PathBuf::from(raw)),
            None => None,
        };

        Ok(Self {
            log_format,
            snapshot_dir,
        })
    }
}
