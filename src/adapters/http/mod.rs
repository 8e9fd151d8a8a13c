//! HTTP adapters - axum routers for the connector's surfaces.

pub mod admin;
pub mod middleware;
pub mod router;
pub mod rpc;
