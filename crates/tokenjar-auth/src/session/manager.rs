//! Session lifecycle manager — create, read, and delete cookie-carried sessions.
//!
//! There is no server-side session table. The signed token in the
//! `auth-token` cookie is the session; every read verifies its signature
//! and expiry before trusting a single claim.

use std::sync::Arc;

use chrono::{DateTime, Duration, SubsecRound, Utc};
use http::HeaderMap;
use tracing::{debug, info, warn};

use tokenjar_core::config::{AuthConfig, Environment};
use tokenjar_core::cookie::{CookieOptions, CookieSource, CookieTransport, RequestCookies, SameSite};
use tokenjar_core::error::AppError;

use crate::jwt::{SessionClaims, SessionTokenDecoder, SessionTokenEncoder, TokenRejection};

use super::lookup::SessionLookup;
use super::payload::SessionPayload;

/// Name of the cookie holding the session token.
pub const SESSION_COOKIE_NAME: &str = "auth-token";

/// Fixed session lifetime.
pub const SESSION_TTL_DAYS: i64 = 7;

/// Path scope of the session cookie.
const SESSION_COOKIE_PATH: &str = "/";

/// Secrets shorter than this are accepted but logged.
const RECOMMENDED_SECRET_BYTES: usize = 32;

/// A freshly signed token and the payload it encodes.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Compact signed token.
    pub token: String,
    /// Identity encoded in the token.
    pub payload: SessionPayload,
    /// Expiry instant shared by the token and its cookie.
    pub expires_at: DateTime<Utc>,
}

/// Manages the session lifecycle over an injected cookie transport.
#[derive(Debug, Clone)]
pub struct SessionManager {
    /// Token signer.
    encoder: Arc<SessionTokenEncoder>,
    /// Token verifier.
    decoder: Arc<SessionTokenDecoder>,
    /// Whether cookies carry the `Secure` attribute.
    secure_cookies: bool,
}

impl SessionManager {
    /// Creates a session manager.
    ///
    /// Fails with a configuration error if the signing secret is empty.
    pub fn new(config: &AuthConfig, environment: Environment) -> Result<Self, AppError> {
        if config.jwt_secret.trim().is_empty() {
            return Err(AppError::configuration(
                "auth.jwt_secret must be set to a non-empty value",
            ));
        }
        if config.jwt_secret.len() < RECOMMENDED_SECRET_BYTES {
            warn!(
                length = config.jwt_secret.len(),
                recommended = RECOMMENDED_SECRET_BYTES,
                "Session signing secret is shorter than recommended"
            );
        }

        Ok(Self {
            encoder: Arc::new(SessionTokenEncoder::new(config)),
            decoder: Arc::new(SessionTokenDecoder::new(config)),
            secure_cookies: environment.is_production(),
        })
    }

    /// Mints a session and writes it into the `auth-token` cookie,
    /// replacing any session already held there.
    pub fn create_session(
        &self,
        jar: &mut dyn CookieTransport,
        user_id: &str,
        email: &str,
    ) -> Result<SessionPayload, AppError> {
        let issued = self.issue_token(user_id, email, Utc::now())?;
        let options = self.cookie_options(issued.expires_at);
        jar.set(SESSION_COOKIE_NAME, &issued.token, &options)?;

        info!(user_id = %issued.payload.user_id, expires_at = %issued.payload.expires_at, "Session created");
        Ok(issued.payload)
    }

    /// Signs a token for the identity as if issued at `now`.
    ///
    /// `now` is truncated to milliseconds so the ISO string, the cookie
    /// expiry, and `exp` all describe the same instant.
    pub fn issue_token(
        &self,
        user_id: &str,
        email: &str,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AppError> {
        if user_id.is_empty() {
            return Err(AppError::validation("userId must not be empty"));
        }
        if email.is_empty() {
            return Err(AppError::validation("email must not be empty"));
        }

        let issued_at = now.trunc_subsecs(3);
        let expires_at = issued_at + Duration::days(SESSION_TTL_DAYS);
        let claims = SessionClaims::new(user_id, email, issued_at, expires_at);
        let token = self.encoder.encode(&claims)?;

        Ok(IssuedToken {
            token,
            payload: claims.into_payload(),
            expires_at,
        })
    }

    /// Reads the current session from a cookie jar.
    pub fn get_session(&self, jar: &dyn CookieSource) -> Option<SessionPayload> {
        self.inspect_session(jar).into_payload()
    }

    /// Reads the current session from an inbound request's `Cookie` headers.
    pub fn verify_session(&self, headers: &HeaderMap) -> Option<SessionPayload> {
        self.inspect_session(&RequestCookies::new(headers))
            .into_payload()
    }

    /// Clears the session cookie. Clearing an empty slot is a no-op.
    pub fn delete_session(&self, jar: &mut dyn CookieTransport) {
        let present = jar.get(SESSION_COOKIE_NAME).is_some();
        jar.delete(SESSION_COOKIE_NAME, SESSION_COOKIE_PATH);
        debug!(present, "Session cookie cleared");
    }

    /// Reads and classifies the session slot without collapsing failures.
    pub fn inspect_session(&self, source: &dyn CookieSource) -> SessionLookup {
        match source.get(SESSION_COOKIE_NAME) {
            Some(token) => self.inspect_token(&token),
            None => SessionLookup::Absent,
        }
    }

    /// Verifies a raw token and classifies the outcome.
    pub fn inspect_token(&self, token: &str) -> SessionLookup {
        match self.decoder.decode(token) {
            Ok(claims) => SessionLookup::Valid(claims.into_payload()),
            Err(TokenRejection::Expired) => {
                debug!("Session token rejected: expired");
                SessionLookup::Expired
            }
            Err(TokenRejection::Invalid(reason)) => {
                debug!(reason = %reason, "Session token rejected");
                SessionLookup::Invalid(reason)
            }
        }
    }

    /// Cookie attributes for a session lapsing at `expires`.
    pub fn cookie_options(&self, expires: DateTime<Utc>) -> CookieOptions {
        CookieOptions {
            http_only: true,
            secure: self.secure_cookies,
            same_site: SameSite::Lax,
            path: SESSION_COOKIE_PATH.to_string(),
            expires,
        }
    }
}
