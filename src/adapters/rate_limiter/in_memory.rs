//! In-memory rate limiter.
//!
//! Fixed-window counters in a HashMap, suitable for this single-process
//! deployment. Windows are created lazily and reset in place when they
//! expire; stale keys are bounded by the small set of client IPs a personal
//! connector sees.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::ports::{
    RateLimitDenied, RateLimitError, RateLimitKey, RateLimitResult, RateLimitStatus, RateLimiter,
};

/// Window size and quota applied to every key.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 100,
            window_secs: 15 * 60,
        }
    }
}

/// State for a single rate limit window.
#[derive(Debug, Clone)]
struct WindowState {
    count: u32,
    window_start: u64,
}

/// Fixed-window in-memory rate limiter.
#[derive(Debug)]
pub struct InMemoryRateLimiter {
    config: RateLimitConfig,
    windows: RwLock<HashMap<String, WindowState>>,
}

impl InMemoryRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            windows: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(RateLimitConfig::default())
    }

    fn now_secs() -> u64 {
        Utc::now().timestamp().max(0) as u64
    }
}

#[async_trait]
impl RateLimiter for InMemoryRateLimiter {
    async fn check(&self, key: RateLimitKey) -> Result<RateLimitResult, RateLimitError> {
        let cache_key = key.cache_key();
        let limit = self.config.max_requests;
        let window_secs = self.config.window_secs;
        let now = Self::now_secs();

        let mut windows = self.windows.write().await;
        let state = windows.entry(cache_key).or_insert_with(|| WindowState {
            count: 0,
            window_start: now,
        });

        // Reset expired windows in place
        if now >= state.window_start + window_secs {
            state.count = 0;
            state.window_start = now;
        }

        if state.count >= limit {
            let retry_after = (state.window_start + window_secs).saturating_sub(now) as u32;
            return Ok(RateLimitResult::Denied(RateLimitDenied {
                limit,
                retry_after_secs: retry_after.max(1),
                scope: key.scope,
                message: format!(
                    "Rate limit exceeded for {}. Retry after {} seconds.",
                    key.scope, retry_after
                ),
            }));
        }

        state.count += 1;
        Ok(RateLimitResult::Allowed(RateLimitStatus {
            limit,
            remaining: limit.saturating_sub(state.count),
            reset_at: state.window_start + window_secs,
            window_secs,
        }))
    }

    async fn status(&self, key: RateLimitKey) -> Result<RateLimitStatus, RateLimitError> {
        let limit = self.config.max_requests;
        let window_secs = self.config.window_secs;
        let now = Self::now_secs();

        let windows = self.windows.read().await;
        let (count, window_start) = windows
            .get(&key.cache_key())
            .map(|state| {
                if now >= state.window_start + window_secs {
                    (0, now)
                } else {
                    (state.count, state.window_start)
                }
            })
            .unwrap_or((0, now));

        Ok(RateLimitStatus {
            limit,
            remaining: limit.saturating_sub(count),
            reset_at: window_start + window_secs,
            window_secs,
        })
    }

    async fn reset(&self, key: RateLimitKey) -> Result<(), RateLimitError> {
        let mut windows = self.windows.write().await;
        windows.remove(&key.cache_key());
        Ok(())
    }
}
