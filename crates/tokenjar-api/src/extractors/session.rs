//! Session extractors — verify the request's `auth-token` cookie and expose the identity.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use tokenjar_auth::SessionPayload;
use tokenjar_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Verified session of the caller. Rejects with 401 when there is none.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub SessionPayload);

impl std::ops::Deref for CurrentSession {
    type Target = SessionPayload;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state
            .session_manager
            .verify_session(&parts.headers)
            .map(CurrentSession)
            .ok_or_else(|| ApiError(AppError::authentication("No valid session")))
    }
}
