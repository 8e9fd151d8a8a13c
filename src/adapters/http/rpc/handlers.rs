//! HTTP handlers for the tool-invocation endpoint.
//!
//! Argument validation happens here, at the adapter boundary: tool handlers
//! are never called with malformed input. Unknown tools are 404, bad
//! arguments 400.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::application::tools::{
    tool_descriptors, AskAboutHandler, AskAnythingHandler, CompareSkillsHandler,
    GetAvailabilityHandler, GetRecommendationsHandler, GetResumeHandler, SearchProjectsHandler,
    ToolReply, TrackAnalyticsHandler,
};
use crate::domain::profile::ProfileRecord;
use crate::ports::{AnalyticsStore, SearchProvider};

use super::super::admin::ErrorResponse;
use super::dto::{InvokeToolRequest, ToolCallResponse, ToolsResponse};

/// Shared state for the tool-invocation routes.
#[derive(Clone)]
pub struct RpcState {
    pub profile: Arc<ProfileRecord>,
    pub search: Arc<dyn SearchProvider>,
    pub store: Arc<dyn AnalyticsStore>,
    pub booking_url: Option<String>,
}

impl RpcState {
    pub fn ask_about_handler(&self) -> AskAboutHandler {
        AskAboutHandler::new(self.profile.clone())
    }

    pub fn ask_anything_handler(&self) -> AskAnythingHandler {
        AskAnythingHandler::new(self.profile.clone(), self.search.clone())
    }

    pub fn compare_skills_handler(&self) -> CompareSkillsHandler {
        CompareSkillsHandler::new(self.profile.clone())
    }

    pub fn get_resume_handler(&self) -> GetResumeHandler {
        GetResumeHandler::new(self.profile.clone())
    }

    pub fn search_projects_handler(&self) -> SearchProjectsHandler {
        SearchProjectsHandler::new(self.profile.clone())
    }

    pub fn get_recommendations_handler(&self) -> GetRecommendationsHandler {
        GetRecommendationsHandler::new(self.profile.clone())
    }

    pub fn get_availability_handler(&self) -> GetAvailabilityHandler {
        GetAvailabilityHandler::new(self.profile.clone(), self.booking_url.clone())
    }

    pub fn track_analytics_handler(&self) -> TrackAnalyticsHandler {
        TrackAnalyticsHandler::new(self.store.clone())
    }
}

/// RPC API error that implements IntoResponse.
#[derive(Debug)]
pub enum RpcApiError {
    UnknownTool(String),
    InvalidArguments(String),
}

impl IntoResponse for RpcApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            RpcApiError::UnknownTool(tool) => {
                (StatusCode::NOT_FOUND, format!("Unknown tool: {}", tool))
            }
            RpcApiError::InvalidArguments(reason) => {
                (StatusCode::BAD_REQUEST, format!("Invalid arguments: {}", reason))
            }
        };
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// POST /rpc
///
/// Dispatches `{tool, arguments}` to the matching tool handler.
pub async fn invoke_tool(
    State(state): State<RpcState>,
    Json(request): Json<InvokeToolRequest>,
) -> Result<Json<ToolCallResponse>, RpcApiError> {
    let reply = dispatch(&state, &request).await?;

    tracing::info!(
        tool = %request.tool,
        view = %reply.payload.view_name(),
        "tool invoked"
    );

    Ok(Json(ToolCallResponse::from_reply(reply)))
}

/// GET /rpc/tools
pub async fn list_tools() -> Json<ToolsResponse> {
    Json(ToolsResponse {
        tools: tool_descriptors(),
    })
}

async fn dispatch(state: &RpcState, request: &InvokeToolRequest) -> Result<ToolReply, RpcApiError> {
    match request.tool.as_str() {
        "ask_about_aneeq" => {
            let input = parse_arguments(&request.arguments)?;
            Ok(state.ask_about_handler().handle(input))
        }
        "get_resume" => {
            let input = parse_arguments(&request.arguments)?;
            Ok(state.get_resume_handler().handle(input))
        }
        "search_projects" => {
            let input = parse_arguments(&request.arguments)?;
            Ok(state.search_projects_handler().handle(input))
        }
        "compare_skills" => {
            let input: crate::application::tools::CompareSkillsInput =
                parse_arguments(&request.arguments)?;
            input.validate().map_err(RpcApiError::InvalidArguments)?;
            Ok(state.compare_skills_handler().handle(input))
        }
        "ask_anything" => {
            let input: crate::application::tools::AskAnythingInput =
                parse_arguments(&request.arguments)?;
            input.validate().map_err(RpcApiError::InvalidArguments)?;
            Ok(state.ask_anything_handler().handle(input))
        }
        "get_recommendations" => {
            let input: crate::application::tools::GetRecommendationsInput =
                parse_arguments(&request.arguments)?;
            input.validate().map_err(RpcApiError::InvalidArguments)?;
            Ok(state.get_recommendations_handler().handle(input))
        }
        "get_availability" => Ok(state.get_availability_handler().handle()),
        "track_analytics" => {
            let input = parse_arguments(&request.arguments)?;
            Ok(state.track_analytics_handler().handle(input).await)
        }
        other => Err(RpcApiError::UnknownTool(other.to_string())),
    }
}

/// Deserializes tool arguments, treating an absent value as `{}`.
fn parse_arguments<T: DeserializeOwned>(value: &serde_json::Value) -> Result<T, RpcApiError> {
    let value = if value.is_null() {
        serde_json::Value::Object(serde_json::Map::new())
    } else {
        value.clone()
    };
    serde_json::from_value(value).map_err(|e| RpcApiError::InvalidArguments(e.to_string()))
}
