//! HTTP routes for the admin analytics API.

use axum::middleware;
use axum::routing::get;
use axum::Router;

use super::handlers::{get_events, get_summary, require_admin_token, AdminState};

/// Creates the admin router, mounted under `/api/analytics`.
pub fn admin_routes(state: AdminState) -> Router {
    Router::new()
        // GET /api/analytics/summary
        .route("/summary", get(get_summary))
        // GET /api/analytics/events?limit=N
        .route("/events", get(get_events))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_admin_token,
        ))
        .with_state(state)
}
