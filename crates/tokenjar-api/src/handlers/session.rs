//! Session handlers — issue, read, and clear the session cookie.

use axum::extract::{Extension, State};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;

use tokenjar_auth::SessionPayload;
use tokenjar_core::error::AppError;

use crate::cookies::JarTransport;
use crate::dto::request::IssueSessionRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::CurrentSession;
use crate::state::AppState;

/// POST /api/session
///
/// Only routed when `auth.allow_direct_issue` is enabled.
pub async fn issue(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<IssueSessionRequest>,
) -> Result<(CookieJar, Json<ApiResponse<SessionPayload>>), ApiError> {
    let mut transport = JarTransport::new(jar);
    let payload = state
        .session_manager
        .create_session(&mut transport, &req.user_id, &req.email)?;

    Ok((transport.into_jar(), Json(ApiResponse::ok(payload))))
}

/// GET /api/session
pub async fn current(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<ApiResponse<SessionPayload>>, ApiError> {
    let session = state
        .session_manager
        .get_session(&JarTransport::new(jar))
        .ok_or_else(|| AppError::authentication("No valid session"))?;

    Ok(Json(ApiResponse::ok(session)))
}

/// GET /api/session/verify
///
/// Same contract as `GET /api/session`, read from the raw request headers.
pub async fn verify(session: CurrentSession) -> Json<ApiResponse<SessionPayload>> {
    Json(ApiResponse::ok(session.0))
}

/// DELETE /api/session
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<MessageResponse>>) {
    let mut transport = JarTransport::new(jar);
    state.session_manager.delete_session(&mut transport);

    (
        transport.into_jar(),
        Json(ApiResponse::ok(MessageResponse {
            message: "Logged out successfully".to_string(),
        })),
    )
}

/// GET /api/me
///
/// Mounted behind `require_session`, which supplies the payload.
pub async fn me(Extension(session): Extension<SessionPayload>) -> Json<ApiResponse<SessionPayload>> {
    Json(ApiResponse::ok(session))
}
