//! Admin analytics API adapter.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, EventsParams, EventsResponse, SummaryResponse};
pub use handlers::{AdminApiError, AdminState};
pub use routes::admin_routes;
