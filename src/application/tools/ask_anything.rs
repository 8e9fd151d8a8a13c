//! AskAnythingHandler - free-text question answered via the search engine.

use std::sync::Arc;

use serde::Deserialize;

use crate::domain::profile::ProfileRecord;
use crate::domain::views::ViewPayload;
use crate::ports::SearchProvider;

use super::reply::ToolReply;

/// Input for the ask-anything tool.
#[derive(Debug, Clone, Deserialize)]
pub struct AskAnythingInput {
    pub query: String,
}

impl AskAnythingInput {
    pub fn validate(&self) -> Result<(), String> {
        if self.query.is_empty() {
            return Err("query must not be empty".to_string());
        }
        Ok(())
    }
}

/// Handler for free-text questions.
///
/// Runs the relevance search and answers with the top-ranked section; when
/// nothing matches it falls back to the overview, echoing the query so the
/// UI can show what was asked.
pub struct AskAnythingHandler {
    profile: Arc<ProfileRecord>,
    search: Arc<dyn SearchProvider>,
}

impl AskAnythingHandler {
    pub fn new(profile: Arc<ProfileRecord>, search: Arc<dyn SearchProvider>) -> Self {
        Self { profile, search }
    }

    pub fn handle(&self, input: AskAnythingInput) -> ToolReply {
        let results = self.search.search(&input.query, &self.profile);

        match results.into_iter().next() {
            None => {
                let text = format!(
                    "I couldn't find specific information about \"{}\". Try asking about \
                     experience, projects, skills, education, or contact details.",
                    input.query
                );
                ToolReply::new(ViewPayload::Overview(self.profile.overview.clone()), text)
                    .with_search_query(input.query)
            }
            Some(top) => {
                let text = format!(
                    "Found information about \"{}\" (matched: {}).",
                    input.query,
                    top.matched_fields.join(", ")
                );
                ToolReply::new(top.payload, text).with_search_query(input.query)
            }
        }
    }
}
