//! Session token verification.

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use thiserror::Error;

use tokenjar_core::config::AuthConfig;

use super::claims::SessionClaims;

/// Why a token failed verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenRejection {
    /// Signature was valid but `exp` has passed.
    #[error("token has expired")]
    Expired,
    /// Malformed, wrongly signed, wrong algorithm, or missing claims.
    #[error("invalid token: {0}")]
    Invalid(String),
}

/// Verifies HS256 session tokens: signature first, then expiry.
#[derive(Clone)]
pub struct SessionTokenDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for SessionTokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokenDecoder")
            .field("validation", &self.validation)
            .finish_non_exhaustive()
    }
}

impl SessionTokenDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_aud = false;
        validation.leeway = config.leeway_seconds;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Verifies a token and returns its claims.
    pub fn decode(&self, token: &str) -> Result<SessionClaims, TokenRejection> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => TokenRejection::Expired,
                JwtErrorKind::InvalidSignature => {
                    TokenRejection::Invalid("signature mismatch".to_string())
                }
                JwtErrorKind::InvalidAlgorithm => {
                    TokenRejection::Invalid("unexpected algorithm".to_string())
                }
                JwtErrorKind::InvalidToken => TokenRejection::Invalid("malformed token".to_string()),
                _ => TokenRejection::Invalid(e.to_string()),
            })
    }
}
