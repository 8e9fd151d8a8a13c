//! Integration tests for the tool-invocation HTTP surface.
//!
//! Drives POST /rpc end-to-end against the bundled profile and an in-memory
//! analytics store, covering dispatch, argument validation, the search
//! fallback, and the probe/health endpoints.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use ask_aneeq::adapters::http::admin::AdminState;
use ask_aneeq::adapters::http::router::{build_router, RouterConfig};
use ask_aneeq::adapters::http::rpc::RpcState;
use ask_aneeq::adapters::rate_limiter::{InMemoryRateLimiter, RateLimitConfig};
use ask_aneeq::adapters::sqlite::SqliteAnalyticsStore;
use ask_aneeq::domain::profile::ProfileRecord;
use ask_aneeq::domain::search::KeywordSearchEngine;

const TOKEN: &str = "test-admin-token";

async fn test_app() -> Router {
    test_app_with_limit(100).await.0
}

async fn test_app_with_limit(max_requests: u32) -> (Router, Arc<SqliteAnalyticsStore>) {
    let store = Arc::new(SqliteAnalyticsStore::in_memory().await.expect("store"));

    let rpc_state = RpcState {
        profile: Arc::new(ProfileRecord::bundled().clone()),
        search: Arc::new(KeywordSearchEngine::new()),
        store: store.clone(),
        booking_url: Some("https://calendly.com/aneeq".to_string()),
    };
    let admin_state = AdminState {
        store: store.clone(),
        token: Some(TOKEN.to_string()),
    };
    let config = RouterConfig {
        rate_limiter: Arc::new(InMemoryRateLimiter::new(RateLimitConfig {
            max_requests,
            window_secs: 60,
        })),
        cors_origins: Vec::new(),
        request_timeout: Duration::from_secs(5),
    };

    (build_router(rpc_state, admin_state, config), store)
}

fn invoke(tool: &str, arguments: serde_json::Value) -> Request<Body> {
    let body = serde_json::json!({"tool": tool, "arguments": arguments});
    Request::builder()
        .method("POST")
        .uri("/rpc")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

// =============================================================================
// Probe and health
// =============================================================================

#[tokio::test]
async fn root_probe_answers_plain_text() {
    let app = test_app().await;
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"AskAneeq profile connector");
}

#[tokio::test]
async fn health_reports_service_and_version() {
    let app = test_app().await;
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "ask-aneeq");
    assert!(json["version"].as_str().is_some());
    assert!(json["uptimeSecs"].as_u64().is_some());
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = test_app().await;
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// =============================================================================
// Tool registry
// =============================================================================

#[tokio::test]
async fn tools_endpoint_lists_all_eight_tools() {
    let app = test_app().await;
    let response = app
        .oneshot(Request::builder().uri("/rpc/tools").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let tools = json["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 8);
    assert!(tools.iter().any(|t| t["name"] == "ask_anything"));
}

// =============================================================================
// Free-text search end-to-end
// =============================================================================

#[tokio::test]
async fn ask_anything_finds_experience_by_company() {
    let app = test_app().await;
    let response = app
        .oneshot(invoke("ask_anything", serde_json::json!({"query": "Dayforce"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let structured = &json["structuredContent"];
    assert_eq!(structured["view"], "experience");
    assert_eq!(structured["data"][0]["company"], "Dayforce");
    assert_eq!(structured["searchQuery"], "Dayforce");
    assert!(json["content"][0]["text"]
        .as_str()
        .unwrap()
        .contains("matched: company"));
}

#[tokio::test]
async fn ask_anything_falls_back_to_overview_with_echo() {
    let app = test_app().await;
    let response = app
        .oneshot(invoke(
            "ask_anything",
            serde_json::json!({"query": "xyznonexistent999"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let structured = &json["structuredContent"];
    assert_eq!(structured["view"], "overview");
    assert_eq!(structured["searchQuery"], "xyznonexistent999");
    assert!(json["content"][0]["text"]
        .as_str()
        .unwrap()
        .contains("couldn't find"));
}

#[tokio::test]
async fn ask_anything_rejects_empty_query() {
    let app = test_app().await;
    let response = app
        .oneshot(invoke("ask_anything", serde_json::json!({"query": ""})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Category and resume tools
// =============================================================================

#[tokio::test]
async fn ask_about_returns_skill_categories() {
    let app = test_app().await;
    let response = app
        .oneshot(invoke(
            "ask_about_aneeq",
            serde_json::json!({"category": "skills"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["structuredContent"]["view"], "skills");
    let categories = json["structuredContent"]["data"].as_array().unwrap();
    assert_eq!(categories.len(), ProfileRecord::bundled().skills.len());
}

#[tokio::test]
async fn ask_about_current_role_focuses_entry() {
    let app = test_app().await;
    let response = app
        .oneshot(invoke(
            "ask_about_aneeq",
            serde_json::json!({"category": "current-role"}),
        ))
        .await
        .unwrap();

    let json = body_json(response).await;
    assert_eq!(json["structuredContent"]["focusId"], "dayforce");
}

#[tokio::test]
async fn get_resume_defaults_to_summary_format() {
    let app = test_app().await;
    let response = app.oneshot(invoke("get_resume", serde_json::Value::Null)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["structuredContent"]["view"], "resume");
    assert_eq!(json["structuredContent"]["format"], "summary");
    assert!(json["content"][0]["text"]
        .as_str()
        .unwrap()
        .starts_with("Executive summary"));
}

#[tokio::test]
async fn search_projects_filters_by_technology() {
    let app = test_app().await;
    let response = app
        .oneshot(invoke(
            "search_projects",
            serde_json::json!({"technology": "redis"}),
        ))
        .await
        .unwrap();

    let json = body_json(response).await;
    let projects = json["structuredContent"]["data"].as_array().unwrap();
    assert!(!projects.is_empty());
    assert_eq!(json["structuredContent"]["technologyFilter"], "redis");
}

#[tokio::test]
async fn compare_skills_reports_proficiencies() {
    let app = test_app().await;
    let response = app
        .oneshot(invoke(
            "compare_skills",
            serde_json::json!({"skills": ["Python", "COBOL"]}),
        ))
        .await
        .unwrap();

    let json = body_json(response).await;
    assert_eq!(json["structuredContent"]["view"], "skill-comparison");
    let matches = json["structuredContent"]["data"].as_array().unwrap();
    assert_eq!(matches[0]["proficiency"], "expert");
    assert_eq!(matches[1]["proficiency"], serde_json::Value::Null);
}

#[tokio::test]
async fn compare_skills_rejects_too_many_names() {
    let app = test_app().await;
    let response = app
        .oneshot(invoke(
            "compare_skills",
            serde_json::json!({"skills": ["a", "b", "c", "d", "e"]}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_availability_uses_configured_booking_url() {
    let app = test_app().await;
    let response = app
        .oneshot(invoke("get_availability", serde_json::Value::Null))
        .await
        .unwrap();

    let json = body_json(response).await;
    assert_eq!(
        json["structuredContent"]["data"]["bookingUrl"],
        "https://calendly.com/aneeq"
    );
}

// =============================================================================
// Dispatch errors
// =============================================================================

#[tokio::test]
async fn unknown_tool_is_404() {
    let app = test_app().await;
    let response = app
        .oneshot(invoke("no_such_tool", serde_json::Value::Null))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("no_such_tool"));
}

#[tokio::test]
async fn malformed_category_is_400() {
    let app = test_app().await;
    let response = app
        .oneshot(invoke(
            "ask_about_aneeq",
            serde_json::json!({"category": "nonsense"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Analytics round trip
// =============================================================================

#[tokio::test]
async fn track_analytics_event_shows_up_in_admin_api() {
    let (app, _store) = test_app_with_limit(100).await;

    let response = app
        .clone()
        .oneshot(invoke(
            "track_analytics",
            serde_json::json!({"tool": "ask_anything", "query": "rust"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["structuredContent"]["data"]["logged"], true);

    let request = Request::builder()
        .method("GET")
        .uri("/api/analytics/events")
        .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let json = body_json(response).await;
    let events = json["events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["tool"], "ask_anything");
    assert_eq!(events[0]["query"], "rust");
}

// =============================================================================
// Rate limiting
// =============================================================================

#[tokio::test]
async fn rpc_requests_beyond_the_window_are_429() {
    let (app, _store) = test_app_with_limit(2).await;

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(invoke("get_availability", serde_json::Value::Null))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .clone()
        .oneshot(invoke("get_availability", serde_json::Value::Null))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(response.headers().contains_key("Retry-After"));

    // Health is outside the rate-limited surface
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn rate_limited_responses_expose_quota_headers() {
    let (app, _store) = test_app_with_limit(10).await;

    let response = app
        .oneshot(invoke("get_availability", serde_json::Value::Null))
        .await
        .unwrap();
    assert_eq!(response.headers().get("x-ratelimit-limit").unwrap(), "10");
    assert_eq!(response.headers().get("x-ratelimit-remaining").unwrap(), "9");
}
