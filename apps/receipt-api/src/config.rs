//! Receipt API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;

use tracing_subscriber::EnvFilter;

/// Default bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default request body cap (1 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Receipt API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Address the HTTP server binds to
    pub host: String,

    /// HTTP server port
    pub port: u16,

    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,

    /// Log filter directive used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from any key lookup.
    ///
    /// ## Variables
    /// - `RECEIPT_API_HOST` - bind address (default: 0.0.0.0)
    /// - `RECEIPT_API_PORT` - listen port (default: 8080)
    /// - `RECEIPT_API_MAX_BODY_BYTES` - body cap (default: 1048576)
    /// - `RECEIPT_API_LOG_LEVEL` - log filter (default: info)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = ApiConfig {
            host: lookup("RECEIPT_API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),

            port: lookup("RECEIPT_API_PORT")
                .unwrap_or_else(|| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("RECEIPT_API_PORT".to_string()))?,

            max_body_bytes: lookup("RECEIPT_API_MAX_BODY_BYTES")
                .unwrap_or_else(|| DEFAULT_MAX_BODY_BYTES.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("RECEIPT_API_MAX_BODY_BYTES".to_string()))?,

            log_level: lookup("RECEIPT_API_LOG_LEVEL")
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        };

        if config.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue("RECEIPT_API_HOST".to_string()));
        }

        if config.max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue("RECEIPT_API_MAX_BODY_BYTES".to_string()));
        }

        if EnvFilter::try_new(&config.log_level).is_err() {
            return Err(ConfigError::InvalidValue("RECEIPT_API_LOG_LEVEL".to_string()));
        }

        Ok(config)
    }

    /// Returns the `host:port` the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
