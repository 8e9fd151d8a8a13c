//! Wire types for the admin analytics API.

use serde::{Deserialize, Serialize};

use crate::ports::{AnalyticsEvent, CategoryCount, ToolCount, DEFAULT_RECENT_LIMIT};

/// GET /api/analytics/summary response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub tool_counts: Vec<ToolCount>,
    pub category_counts: Vec<CategoryCount>,
}

/// GET /api/analytics/events response body.
#[derive(Debug, Serialize)]
pub struct EventsResponse {
    pub events: Vec<AnalyticsEvent>,
}

/// Query parameters for the events endpoint.
///
/// `limit` is accepted as a raw string so that non-numeric values fall back
/// to the default instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct EventsParams {
    pub limit: Option<String>,
}

impl EventsParams {
    /// The limit to apply: positive integers pass through, anything else
    /// (missing, non-numeric, zero, negative) becomes the default of 50.
    pub fn effective_limit(&self) -> i64 {
        self.limit
            .as_deref()
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_RECENT_LIMIT)
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
