//! Ports - Interfaces between the core and the outside world.
//!
//! Following hexagonal architecture, ports define the contracts the adapters
//! implement: the analytics event log, the search provider invoked by the
//! free-text tool, and the rate limiter fronting the RPC endpoint.

mod analytics_store;
mod rate_limiter;
mod search_provider;

pub use analytics_store::{
    AnalyticsError, AnalyticsEvent, AnalyticsStore, CategoryCount, NewAnalyticsEvent, ToolCount,
    DEFAULT_RECENT_LIMIT,
};
pub use rate_limiter::{
    RateLimitDenied, RateLimitError, RateLimitKey, RateLimitResult, RateLimitScope,
    RateLimitStatus, RateLimiter,
};
pub use search_provider::SearchProvider;
