//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

/// Errors raised by semantic validation of loaded configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("server port must be non-zero")]
    InvalidPort,

    #[error("request timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("rate limit window and max requests must be non-zero")]
    InvalidRateLimit,

    #[error("analytics db_path cannot be empty")]
    EmptyDbPath,

    #[error("admin token cannot be empty when set")]
    EmptyAdminToken,
}
