//! Tagged outcome of a session read.

use super::payload::SessionPayload;

/// What a session read found in the cookie slot.
///
/// Read paths collapse everything but [`SessionLookup::Valid`] into "no
/// session"; the tags exist for logging and operator tooling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionLookup {
    /// No session cookie present.
    Absent,
    /// Correctly signed but past its expiry.
    Expired,
    /// Malformed, tampered, or signed with another key.
    Invalid(String),
    /// Verified session.
    Valid(SessionPayload),
}

impl SessionLookup {
    /// Collapses the lookup to the public contract.
    pub fn into_payload(self) -> Option<SessionPayload> {
        match self {
            Self::Valid(payload) => Some(payload),
            Self::Absent | Self::Expired | Self::Invalid(_) => None,
        }
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Expired => "expired",
            Self::Invalid(_) => "invalid",
            Self::Valid(_) => "valid",
        }
    }
}
