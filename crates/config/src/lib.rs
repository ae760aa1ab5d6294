//! Configuration for the oracle engine, loaded from TOML.

mod config;
mod costs;

pub use config::{ConfigError, LedgerConfig, LoggingConfig, MeterConfig, OracleConfig};
pub use costs::CostSchedule;
