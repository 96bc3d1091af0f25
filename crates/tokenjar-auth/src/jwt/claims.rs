//! Claims carried inside every session token.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::session::SessionPayload;

/// Formats an instant the way `expiresAt` is stored: RFC 3339, millisecond
/// precision, `Z` suffix.
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Token payload: the session identity plus the registered `iat`/`exp` claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    /// Opaque user identity key.
    pub user_id: String,
    /// Contact identifier.
    pub email: String,
    /// ISO-8601 expiry, mirrored by `exp`.
    pub expires_at: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl SessionClaims {
    /// Builds claims for a session issued at `issued_at` and lapsing at `expires_at`.
    pub fn new(
        user_id: impl Into<String>,
        email: impl Into<String>,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            expires_at: format_instant(expires_at),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Drops the registered claims, keeping only the session identity.
    pub fn into_payload(self) -> SessionPayload {
        SessionPayload {
            user_id: self.user_id,
            email: self.email,
            expires_at: self.expires_at,
        }
    }
}
