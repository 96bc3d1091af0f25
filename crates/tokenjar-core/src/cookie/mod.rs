//! Cookie transport capability.
//!
//! The session layer never reaches into ambient request state. It is handed
//! a [`CookieSource`] to read from, or a [`CookieTransport`] to read and
//! write. An HTTP framework's cookie jar, a parsed `Cookie` request header,
//! and an in-memory jar are all interchangeable behind these traits.

pub mod memory;
pub mod options;
pub mod request;

pub use memory::MemoryCookieJar;
pub use options::{CookieOptions, SameSite};
pub use request::RequestCookies;

use crate::result::AppResult;

/// Read-only cookie lookup by name.
pub trait CookieSource {
    /// Returns the value of the named cookie, if present.
    fn get(&self, name: &str) -> Option<String>;
}

/// Read/write cookie surface on a request/response boundary.
pub trait CookieTransport: CookieSource {
    /// Sets (or overwrites) a cookie with the given attributes.
    fn set(&mut self, name: &str, value: &str, options: &CookieOptions) -> AppResult<()>;

    /// Removes a cookie. Removing a cookie that is not present is a no-op.
    fn delete(&mut self, name: &str, path: &str);
}
