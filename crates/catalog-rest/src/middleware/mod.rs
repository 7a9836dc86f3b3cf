//! HTTP middleware.

mod auth;
mod logging;

pub use auth::require_api_token;
pub use logging::logging_middleware;
