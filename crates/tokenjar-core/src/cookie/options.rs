//! Transport-agnostic cookie attributes.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The `SameSite` cookie attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SameSite {
    /// Only sent on same-site requests.
    Strict,
    /// Also sent on top-level cross-site navigations.
    Lax,
    /// Always sent; requires `Secure` in modern browsers.
    None,
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Lax => write!(f, "lax"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Attributes attached to a cookie when it is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieOptions {
    /// Hidden from client-side script.
    pub http_only: bool,
    /// Only sent over HTTPS.
    pub secure: bool,
    /// Cross-site sending policy.
    pub same_site: SameSite,
    /// Path scope.
    pub path: String,
    /// Absolute expiry instant.
    pub expires: DateTime<Utc>,
}
