//! Session guard for route groups.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use tokenjar_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Rejects requests without a verified session.
///
/// On success the [`tokenjar_auth::SessionPayload`] is placed in the request
/// extensions for downstream handlers.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let session = state
        .session_manager
        .verify_session(request.headers())
        .ok_or_else(|| ApiError(AppError::authentication("No valid session")))?;

    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}
