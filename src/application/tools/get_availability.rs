//! GetAvailabilityHandler - returns the scheduling link.

use std::sync::Arc;

use crate::domain::profile::ProfileRecord;
use crate::domain::views::{AvailabilityView, ViewPayload};

use super::reply::ToolReply;

/// Handler for the availability tool.
///
/// Uses the configured booking URL; falls back to the profile's portfolio
/// link when none is configured.
pub struct GetAvailabilityHandler {
    profile: Arc<ProfileRecord>,
    booking_url: Option<String>,
}

impl GetAvailabilityHandler {
    pub fn new(profile: Arc<ProfileRecord>, booking_url: Option<String>) -> Self {
        Self {
            profile,
            booking_url,
        }
    }

    pub fn handle(&self) -> ToolReply {
        let booking_url = self
            .booking_url
            .clone()
            .unwrap_or_else(|| self.profile.contact.portfolio.clone());
        let name = self.profile.overview.name.clone();
        let text = format!("Schedule time with {}: {}", name, booking_url);

        ToolReply::new(
            ViewPayload::Availability(AvailabilityView { booking_url, name }),
            text,
        )
    }
}
