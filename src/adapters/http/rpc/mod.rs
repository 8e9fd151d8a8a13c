//! Tool-invocation RPC adapter.

mod dto;
mod handlers;
mod routes;

pub use dto::{ContentBlock, InvokeToolRequest, ToolCallResponse, ToolsResponse};
pub use handlers::{invoke_tool, list_tools, RpcApiError, RpcState};
pub use routes::rpc_routes;
