//! Analytics store configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Analytics store configuration (embedded SQLite)
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsConfig {
    /// Path of the SQLite database file
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl AnalyticsConfig {
    /// Validate analytics configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.db_path.trim().is_empty() {
            return Err(ValidationError::EmptyDbPath);
        }
        Ok(())
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

fn default_db_path() -> String {
    "./analytics.db".to_string()
}
