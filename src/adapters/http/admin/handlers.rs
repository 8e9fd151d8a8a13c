//! HTTP handlers for the admin analytics API.
//!
//! Every route sits behind bearer-token auth: a missing configured token
//! means the surface is disabled (503 for everyone); a missing or mismatched
//! credential is 401. Storage failures on the read path surface as 500
//! rather than being masked.

use std::sync::Arc;

use axum::extract::{Query, Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::ports::{AnalyticsError, AnalyticsStore};

use super::dto::{ErrorResponse, EventsParams, EventsResponse, SummaryResponse};

/// Shared state for the admin routes.
#[derive(Clone)]
pub struct AdminState {
    pub store: Arc<dyn AnalyticsStore>,
    /// The configured bearer token; None disables the surface.
    pub token: Option<String>,
}

/// Admin API error that implements IntoResponse.
pub enum AdminApiError {
    Internal(String),
}

impl IntoResponse for AdminApiError {
    fn into_response(self) -> Response {
        match self {
            AdminApiError::Internal(message) => {
                tracing::error!(error = %message, "admin analytics query failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Internal server error")),
                )
                    .into_response()
            }
        }
    }
}

impl From<AnalyticsError> for AdminApiError {
    fn from(error: AnalyticsError) -> Self {
        AdminApiError::Internal(error.to_string())
    }
}

/// Bearer-token gate in front of every admin route.
pub async fn require_admin_token(
    State(state): State<AdminState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = state.token.as_deref() else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse::new("Admin token not configured")),
        )
            .into_response();
    };

    let provided = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match provided {
        Some(token) if token == expected => next.run(request).await,
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("Unauthorized")),
        )
            .into_response(),
    }
}

/// GET /api/analytics/summary
pub async fn get_summary(
    State(state): State<AdminState>,
) -> Result<Json<SummaryResponse>, AdminApiError> {
    let tool_counts = state.store.tool_counts().await?;
    let category_counts = state.store.category_counts().await?;

    Ok(Json(SummaryResponse {
        tool_counts,
        category_counts,
    }))
}

/// GET /api/analytics/events?limit=N
pub async fn get_events(
    State(state): State<AdminState>,
    Query(params): Query<EventsParams>,
) -> Result<Json<EventsResponse>, AdminApiError> {
    let events = state.store.recent_events(params.effective_limit()).await?;
    Ok(Json(EventsResponse { events }))
}
