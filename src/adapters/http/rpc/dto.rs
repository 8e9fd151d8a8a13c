//! Wire types for the tool-invocation endpoint.

use serde::{Deserialize, Serialize};

use crate::application::tools::{ToolDescriptor, ToolReply};

/// POST /rpc request body.
#[derive(Debug, Clone, Deserialize)]
pub struct InvokeToolRequest {
    /// Name of the tool to invoke.
    pub tool: String,
    /// Tool arguments; an absent field means "no arguments".
    #[serde(default)]
    pub arguments: serde_json::Value,
}

/// POST /rpc response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallResponse {
    pub structured_content: ToolReply,
    pub content: Vec<ContentBlock>,
}

impl ToolCallResponse {
    /// Wraps a reply: the structured payload plus one text content block.
    pub fn from_reply(reply: ToolReply) -> Self {
        let content = vec![ContentBlock::text(reply.text.clone())];
        Self {
            structured_content: reply,
            content,
        }
    }
}

/// One content block of a tool response.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: "text",
            text: text.into(),
        }
    }
}

/// GET /rpc/tools response body.
#[derive(Debug, Serialize)]
pub struct ToolsResponse {
    pub tools: Vec<ToolDescriptor>,
}
