//! The identity recovered from a verified session token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated identity and its validity window.
///
/// Immutable once minted. This is exactly what callers get back from a
/// verified token; registered claims such as `exp` and `iat` never appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPayload {
    /// Opaque user identity key.
    pub user_id: String,
    /// Contact identifier.
    pub email: String,
    /// ISO-8601 expiry instant.
    pub expires_at: String,
}

impl SessionPayload {
    /// Parses `expires_at` back into an instant.
    pub fn expires_at_instant(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.expires_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
