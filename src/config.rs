use std::env;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    pub log_filter: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("RUST_LOG must be a valid tracing filter directive")]
    InvalidLogFilter,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_log_filter(env::var("RUST_LOG").ok())
    }

    pub fn from_log_filter(value: Option<String>) -> Result<Self, ConfigError> {
        let log_filter = value
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        EnvFilter::try_new(&log_filter).map_err(|_| ConfigError::InvalidLogFilter)?;

        Ok(Self { log_filter })
    }

    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.log_filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    }
}
