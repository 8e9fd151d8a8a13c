//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `ASK_ANEEQ` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use ask_aneeq::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod admin;
mod analytics;
mod availability;
mod error;
mod server;

pub use admin::AdminConfig;
pub use analytics::AnalyticsConfig;
pub use availability::AvailabilityConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, rate limits)
    #[serde(default)]
    pub server: ServerConfig,

    /// Analytics store configuration (SQLite file path)
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    /// Admin API configuration (bearer token)
    #[serde(default)]
    pub admin: AdminConfig,

    /// Availability tool configuration (booking URL)
    #[serde(default)]
    pub availability: AvailabilityConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present (development), then reads variables with the
    /// `ASK_ANEEQ` prefix, using `__` to separate nested values:
    ///
    /// - `ASK_ANEEQ__SERVER__PORT=8000` -> `server.port = 8000`
    /// - `ASK_ANEEQ__ADMIN__TOKEN=...` -> `admin.token = ...`
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ASK_ANEEQ")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.analytics.validate()?;
        self.admin.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
