use quiz_core::lrs::LrsConfig;
use std::net::SocketAddr;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
///
/// Everything has a default: the service comes up against the public ADL
/// demo LRS with no environment at all.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub lrs: LrsConfig,
    pub log_level: Level,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let bind_address_str =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let bind_address = bind_address_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string()))?;

        let defaults = LrsConfig::default();
        let lrs = LrsConfig {
            endpoint: std::env::var("LRS_ENDPOINT").unwrap_or(defaults.endpoint),
            username: std::env::var("LRS_USERNAME").unwrap_or(defaults.username),
            password: std::env::var("LRS_PASSWORD").unwrap_or(defaults.password),
        };

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        Ok(Self {
            bind_address,
            lrs,
            log_level,
        })
    }
}
