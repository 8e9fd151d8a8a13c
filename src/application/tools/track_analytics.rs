//! TrackAnalyticsHandler - logs one tool invocation to the event store.

use std::sync::Arc;

use serde::Deserialize;

use crate::domain::views::{AnalyticsAck, ViewPayload};
use crate::ports::{AnalyticsStore, NewAnalyticsEvent};

use super::reply::ToolReply;

/// Input for the track-analytics tool.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackAnalyticsInput {
    /// The tool that was called.
    pub tool: String,
    /// The query or question asked, if applicable.
    pub query: Option<String>,
    /// Category, if applicable.
    pub category: Option<String>,
    /// The user's message verbatim, if shared.
    pub user_message: Option<String>,
}

/// Handler for analytics tracking.
///
/// Analytics are best-effort: a storage failure is logged and swallowed, so
/// a broken analytics database never breaks the chat surface.
pub struct TrackAnalyticsHandler {
    store: Arc<dyn AnalyticsStore>,
}

impl TrackAnalyticsHandler {
    pub fn new(store: Arc<dyn AnalyticsStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, input: TrackAnalyticsInput) -> ToolReply {
        let event = NewAnalyticsEvent {
            tool: input.tool.clone(),
            query: input.query,
            category: input.category,
            user_message: input.user_message,
        };

        if let Err(err) = self.store.insert(event).await {
            tracing::warn!(tool = %input.tool, error = %err, "failed to record analytics event");
        }

        ToolReply::new(
            ViewPayload::Analytics(AnalyticsAck { logged: true }),
            "Query logged.",
        )
    }
}
