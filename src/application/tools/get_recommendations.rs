//! GetRecommendationsHandler - returns colleague recommendations.

use std::sync::Arc;

use serde::Deserialize;

use crate::domain::profile::ProfileRecord;
use crate::domain::views::ViewPayload;

use super::reply::ToolReply;

/// Largest allowed recommendation limit.
pub const MAX_LIMIT: usize = 10;

/// Input for the get-recommendations tool.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetRecommendationsInput {
    /// Max number of recommendations to return (default: all).
    pub limit: Option<usize>,
}

impl GetRecommendationsInput {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(limit) = self.limit {
            if limit == 0 || limit > MAX_LIMIT {
                return Err(format!("limit must be between 1 and {}", MAX_LIMIT));
            }
        }
        Ok(())
    }
}

/// Handler for recommendation retrieval.
pub struct GetRecommendationsHandler {
    profile: Arc<ProfileRecord>,
}

impl GetRecommendationsHandler {
    pub fn new(profile: Arc<ProfileRecord>) -> Self {
        Self { profile }
    }

    pub fn handle(&self, input: GetRecommendationsInput) -> ToolReply {
        let recommendations = match input.limit {
            Some(limit) => self
                .profile
                .recommendations
                .iter()
                .take(limit)
                .cloned()
                .collect(),
            None => self.profile.recommendations.clone(),
        };

        let count = recommendations.len();
        let plural = if count == 1 { "" } else { "s" };
        let text = format!(
            "{} recommendation{} from people who've worked with {}.",
            count, plural, self.profile.overview.name
        );

        ToolReply::new(ViewPayload::Recommendations(recommendations), text)
    }
}
