//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the core to the outside world: SQLite persistence for
//! the analytics log, the in-memory rate limiter, and the axum HTTP
//! surfaces.

pub mod http;
pub mod rate_limiter;
pub mod sqlite;
