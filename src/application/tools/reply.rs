//! Tool reply type shared by every tool handler.

use serde::{Deserialize, Serialize};

use crate::domain::views::ViewPayload;

/// Resume rendering mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResumeFormat {
    Full,
    #[default]
    Summary,
}

/// Structured outcome of one tool invocation.
///
/// The view payload plus optional echo fields serialized alongside it, and a
/// human-readable summary the RPC layer renders as a text content block.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToolReply {
    #[serde(flatten)]
    pub payload: ViewPayload,

    /// Echo of the free-text query, when the tool took one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,

    /// Echo of the technology filter, when the tool took one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technology_filter: Option<String>,

    /// Entity id the view should focus, when one entry is singled out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_id: Option<String>,

    /// Echo of the resume format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ResumeFormat>,

    /// Human-readable summary; rendered as a content block, not part of the
    /// structured payload.
    #[serde(skip)]
    pub text: String,
}

impl ToolReply {
    pub fn new(payload: ViewPayload, text: impl Into<String>) -> Self {
        Self {
            payload,
            search_query: None,
            technology_filter: None,
            focus_id: None,
            format: None,
            text: text.into(),
        }
    }

    pub fn with_search_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    pub fn with_technology_filter(mut self, technology: impl Into<String>) -> Self {
        self.technology_filter = Some(technology.into());
        self
    }

    pub fn with_focus_id(mut self, id: impl Into<String>) -> Self {
        self.focus_id = Some(id.into());
        self
    }

    pub fn with_format(mut self, format: ResumeFormat) -> Self {
        self.format = Some(format);
        self
    }
}
