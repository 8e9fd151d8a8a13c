//! Top-level router assembly.
//!
//! Wires the probe, health, tool-invocation, and admin surfaces together
//! with tracing, request ids, timeouts, CORS, and rate limiting.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::State;
use axum::http::{header, HeaderValue, Method};
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::ports::RateLimiter;

use super::admin::{admin_routes, AdminState};
use super::middleware::rate_limit_middleware;
use super::rpc::{rpc_routes, RpcState};

pub const SERVICE_NAME: &str = "ask-aneeq";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything the router needs beyond the per-surface states.
pub struct RouterConfig {
    pub rate_limiter: Arc<dyn RateLimiter>,
    /// Explicit CORS origins; empty means permissive (development).
    pub cors_origins: Vec<String>,
    pub request_timeout: Duration,
}

/// State backing the health endpoint.
#[derive(Clone)]
struct HealthState {
    started_at: Instant,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    uptime_secs: u64,
    timestamp: String,
}

/// Builds the complete application router.
pub fn build_router(rpc_state: RpcState, admin_state: AdminState, config: RouterConfig) -> Router {
    let health_state = HealthState {
        started_at: Instant::now(),
    };

    let rpc = rpc_routes(rpc_state).layer(middleware::from_fn_with_state(
        config.rate_limiter.clone(),
        rate_limit_middleware,
    ));

    Router::new()
        // Root probe - connector platforms check this when registering
        .route("/", get(root_probe))
        .route("/health", get(health).with_state(health_state))
        .merge(rpc)
        .nest("/api/analytics", admin_routes(admin_state))
        // Layers run outermost-last: request ids are stamped before tracing,
        // and propagated onto the response on the way out
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(cors_layer(&config.cors_origins))
}

async fn root_probe() -> &'static str {
    "AskAneeq profile connector"
}

async fn health(State(state): State<HealthState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
        uptime_secs: state.started_at.elapsed().as_secs(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Explicit origins when configured, permissive otherwise.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| o.parse::<HeaderValue>().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
