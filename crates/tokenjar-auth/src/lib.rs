//! # tokenjar-auth
//!
//! Stateless, cookie-carried sessions built on signed, time-limited tokens.
//!
//! ## Modules
//!
//! - `jwt` — session claims, HS256 token encoding and verification
//! - `session` — session lifecycle over a cookie transport (create, read, delete)

pub mod jwt;
pub mod session;

pub use jwt::{SessionClaims, SessionTokenDecoder, SessionTokenEncoder, TokenRejection};
pub use session::{
    IssuedToken, SESSION_COOKIE_NAME, SESSION_TTL_DAYS, SessionLookup, SessionManager,
    SessionPayload,
};
