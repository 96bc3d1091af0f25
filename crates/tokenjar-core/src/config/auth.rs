//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Session token signing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for session token signing (HMAC-SHA256). Required.
    pub jwt_secret: String,
    /// Clock skew tolerance applied to the `exp` check, in seconds.
    #[serde(default)]
    pub leeway_seconds: u64,
    /// Mounts `POST /api/session`, which mints a session for any posted
    /// identity. Only for deployments where identity is verified upstream.
    #[serde(default)]
    pub allow_direct_issue: bool,
}

impl AuthConfig {
    /// Creates an auth config with the given secret and default settings.
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            leeway_seconds: 0,
            allow_direct_issue: false,
        }
    }
}
