//! Shared utilities for tally.

pub mod config;
pub mod logging;

pub use config::{ConfigError, StorageConfig, TallyConfig, VotingConfig};
pub use logging::{init_logging, LogFormat};
