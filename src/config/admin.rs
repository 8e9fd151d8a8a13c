//! Admin API configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Admin API configuration
///
/// When no token is configured the admin surface answers 503 to every
/// request, regardless of supplied credentials.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminConfig {
    /// Bearer token protecting the analytics API
    pub token: Option<String>,
}

impl AdminConfig {
    /// Validate admin configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(token) = &self.token {
            if token.trim().is_empty() {
                return Err(ValidationError::EmptyAdminToken);
            }
        }
        Ok(())
    }
}
