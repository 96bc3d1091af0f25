//! Session lifecycle over a cookie transport.

pub mod lookup;
pub mod manager;
pub mod payload;

pub use lookup::SessionLookup;
pub use manager::{IssuedToken, SESSION_COOKIE_NAME, SESSION_TTL_DAYS, SessionManager};
pub use payload::SessionPayload;
