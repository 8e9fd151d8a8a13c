//! HTTP routes for tool invocation.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{invoke_tool, list_tools, RpcState};

/// Creates the RPC router.
pub fn rpc_routes(state: RpcState) -> Router {
    Router::new()
        // POST /rpc - invoke one tool
        .route("/rpc", post(invoke_tool))
        // GET /rpc/tools - list tool descriptors
        .route("/rpc/tools", get(list_tools))
        .with_state(state)
}
