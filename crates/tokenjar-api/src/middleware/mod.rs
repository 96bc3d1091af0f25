//! HTTP middleware.

pub mod auth;
pub mod logging;

pub use auth::require_session;
pub use logging::request_logging;
