//! Configuration file support
//!
//! ```yaml
//! retry:
//!   max_attempts: 3
//!   delay_ms: 1000
//! log_level: info
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::Level;

use crate::retry::{PolicyError, RetryPolicy};

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    #[error("Invalid retry policy: {0}")]
    Policy(#[from] PolicyError),
}

/// Top-level configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapConfig {
    pub retry: RetryConfig,
    pub log_level: Option<String>,
}

/// Retry section of the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: RetryPolicy::DEFAULT_MAX_ATTEMPTS,
            delay_ms: RetryPolicy::DEFAULT_DELAY.as_millis() as u64,
        }
    }
}

impl RetryConfig {
    /// Build the policy this section describes
    pub fn to_policy(&self) -> Result<RetryPolicy, PolicyError> {
        RetryPolicy::from_millis(self.max_attempts, self.delay_ms)
    }
}

impl WrapConfig {
    /// Parse configuration from YAML
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: WrapConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.retry.to_policy()?;
        self.log_level()?;
        Ok(())
    }

    /// Configured log level, INFO when unset
    pub fn log_level(&self) -> Result<Level, ConfigError> {
        self.log_level
            .as_deref()
            .map_or(Ok(Level::INFO), parse_level)
    }
}

/// Parse a level name such as `info` or `DEBUG`
pub fn parse_level(level: &str) -> Result<Level, ConfigError> {
    Level::from_str(level).map_err(|_| ConfigError::InvalidLevel(level.to_string()))
}
