//! Session token signing.

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

use tokenjar_core::config::AuthConfig;
use tokenjar_core::error::AppError;

use super::claims::SessionClaims;

/// Signs session claims into compact HS256 tokens.
#[derive(Clone)]
pub struct SessionTokenEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Protected header (`alg=HS256`, `typ=JWT`).
    header: Header,
}

impl std::fmt::Debug for SessionTokenEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokenEncoder")
            .field("header", &self.header)
            .finish_non_exhaustive()
    }
}

impl SessionTokenEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            header: Header::new(Algorithm::HS256),
        }
    }

    /// Signs the claims into a `header.payload.signature` token.
    pub fn encode(&self, claims: &SessionClaims) -> Result<String, AppError> {
        encode(&self.header, claims, &self.encoding_key).map_err(|e| {
            AppError::with_source(
                tokenjar_core::error::ErrorKind::Internal,
                format!("Failed to encode session token: {e}"),
                e,
            )
        })
    }
}
