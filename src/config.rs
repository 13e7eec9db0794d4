use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_ENV: &str = "BMI_ML_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Front-end settings. Every field is optional in the JSON file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default `env_logger` filter, overridden by `RUST_LOG`.
    pub log_filter: String,
    /// Upper bound on the number of error histogram bins.
    pub histogram_bins: usize,
    /// Seed used by the `synthetic` command.
    pub synthetic_seed: u64,
    pub prompt: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            histogram_bins: 10,
            synthetic_seed: 42,
            prompt: "bmi> ".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Loads from `path`, then from `$BMI_ML_CONFIG`, falling back to defaults.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        match path.map(str::to_string).or_else(|| std::env::var(CONFIG_ENV).ok()) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.histogram_bins == 0 {
            return Err(ConfigError::Invalid("histogram_bins must be > 0".into()));
        }
        Ok(())
    }
}
