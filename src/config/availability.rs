//! Availability tool configuration

use serde::Deserialize;

/// Availability tool configuration
///
/// The booking URL backs the get-availability tool; when unset the tool
/// falls back to the profile's portfolio link.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvailabilityConfig {
    /// Scheduling link (e.g. a Calendly URL)
    pub booking_url: Option<String>,
}
