use std::{fs, io, path::Path, path::PathBuf};

use oracle_ledger::{LedgerPolicy, DEFAULT_FUTURE_TOLERANCE_SECS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::costs::CostSchedule;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config file: {0}")]
    Io(#[from] io::Error),

    #[error("parsing config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

fn default_future_tolerance_secs() -> u64 {
    DEFAULT_FUTURE_TOLERANCE_SECS
}

/// Checkpoint ledger settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Seconds past the current time at which timestamps start being refused.
    #[serde(default = "default_future_tolerance_secs")]
    pub future_tolerance_secs: u64,

    /// Directory for the durable store. Checkpoints are kept in memory only
    /// when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datadir: Option<PathBuf>,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            future_tolerance_secs: DEFAULT_FUTURE_TOLERANCE_SECS,
            datadir: None,
        }
    }
}

impl LedgerConfig {
    pub fn policy(&self) -> LedgerPolicy {
        LedgerPolicy {
            future_tolerance_secs: self.future_tolerance_secs,
        }
    }
}

/// Resource meter settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeterConfig {
    /// Per-call budget. Calls are measured but never cut off when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_budget: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Directory path for file-based logging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,

    /// Prefix for log file names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file_prefix: Option<String>,

    /// Use JSON format for logs instead of compact format.
    #[serde(default)]
    pub json_format: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleConfig {
    #[serde(default)]
    pub ledger: LedgerConfig,

    #[serde(default)]
    pub costs: CostSchedule,

    #[serde(default)]
    pub meter: MeterConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl OracleConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ledger.future_tolerance_secs == 0 {
            return Err(ConfigError::Invalid(
                "ledger.future_tolerance_secs must be non-zero",
            ));
        }
        if self.meter.call_budget == Some(0) {
            return Err(ConfigError::Invalid("meter.call_budget must be non-zero"));
        }
        Ok(())
    }
}
