//! Rate limiting middleware for the tool-invocation endpoint.
//!
//! Requests are limited per client IP; when no IP can be determined the
//! shared global window applies instead. Rate limit status is returned in
//! standard headers:
//! - `X-RateLimit-Limit`: maximum requests allowed in the window
//! - `X-RateLimit-Remaining`: requests remaining in the current window
//! - `X-RateLimit-Reset`: unix timestamp when the window resets
//! - `Retry-After`: seconds to wait (only on 429)
//!
//! The middleware fails open: if the limiter itself errors, the request
//! proceeds.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{ConnectInfo, Request, State};
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::ports::{RateLimitKey, RateLimitResult, RateLimiter};

use super::super::admin::ErrorResponse;

/// Rate limiter middleware state.
pub type RateLimiterState = Arc<dyn RateLimiter>;

static X_RATELIMIT_LIMIT: HeaderName = HeaderName::from_static("x-ratelimit-limit");
static X_RATELIMIT_REMAINING: HeaderName = HeaderName::from_static("x-ratelimit-remaining");
static X_RATELIMIT_RESET: HeaderName = HeaderName::from_static("x-ratelimit-reset");

/// Fixed-window rate limiting keyed by client IP.
pub async fn rate_limit_middleware(
    State(limiter): State<RateLimiterState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    request: Request,
    next: Next,
) -> Response {
    let key = match extract_client_ip(&request, connect_info.as_ref()) {
        Some(ip) => RateLimitKey::ip(&ip),
        None => RateLimitKey::global(),
    };

    let status = match limiter.check(key).await {
        Ok(RateLimitResult::Denied(denied)) => {
            return rate_limit_response(denied.limit, denied.retry_after_secs);
        }
        Ok(RateLimitResult::Allowed(status)) => Some(status),
        Err(e) => {
            tracing::warn!(error = %e, "rate limiter unavailable");
            // Fail open for availability
            None
        }
    };

    let mut response = next.run(request).await;

    if let Some(status) = status {
        let headers = response.headers_mut();
        insert_numeric(headers, &X_RATELIMIT_LIMIT, status.limit as u64);
        insert_numeric(headers, &X_RATELIMIT_REMAINING, status.remaining as u64);
        insert_numeric(headers, &X_RATELIMIT_RESET, status.reset_at);
    }

    response
}

/// Extract client IP from request, checking forwarded headers first.
///
/// Order of precedence: X-Forwarded-For (first entry), X-Real-IP, then the
/// socket address.
fn extract_client_ip<B>(
    request: &axum::http::Request<B>,
    connect_info: Option<&ConnectInfo<SocketAddr>>,
) -> Option<String> {
    if let Some(forwarded) = request
        .headers()
        .get("X-Forwarded-For")
        .and_then(|h| h.to_str().ok())
    {
        if let Some(first_ip) = forwarded.split(',').next() {
            return Some(first_ip.trim().to_string());
        }
    }

    if let Some(real_ip) = request
        .headers()
        .get("X-Real-IP")
        .and_then(|h| h.to_str().ok())
    {
        return Some(real_ip.to_string());
    }

    connect_info.map(|ci| ci.0.ip().to_string())
}

/// Create a 429 Too Many Requests response.
fn rate_limit_response(limit: u32, retry_after_secs: u32) -> Response {
    let mut response = (
        StatusCode::TOO_MANY_REQUESTS,
        Json(ErrorResponse::new(
            "Too many requests, please try again later",
        )),
    )
        .into_response();

    let headers = response.headers_mut();
    insert_numeric(headers, &X_RATELIMIT_LIMIT, limit as u64);
    insert_numeric(headers, &X_RATELIMIT_REMAINING, 0);
    if let Ok(value) = HeaderValue::from_str(&retry_after_secs.to_string()) {
        headers.insert("Retry-After", value);
    }

    response
}

fn insert_numeric(headers: &mut axum::http::HeaderMap, name: &HeaderName, value: u64) {
    if let Ok(value) = HeaderValue::from_str(&value.to_string()) {
        headers.insert(name.clone(), value);
    }
}
