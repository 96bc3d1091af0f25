//! Per-request access log.

use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{error, info, warn};

/// Emits one event per request, keyed by route template rather than raw path.
///
/// Rejected sessions show up as `warn` so a burst of 401s stands out from
/// normal traffic; server faults are `error`.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    let level = level_for(status);
    if level == tracing::Level::ERROR {
        error!(%method, %route, status = status.as_u16(), elapsed_ms, "Request failed");
    } else if level == tracing::Level::WARN {
        warn!(%method, %route, status = status.as_u16(), elapsed_ms, "Request rejected");
    } else {
        info!(%method, %route, status = status.as_u16(), elapsed_ms, "Request served");
    }

    response
}

fn level_for(status: StatusCode) -> tracing::Level {
    if status.is_server_error() {
        tracing::Level::ERROR
    } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::BAD_REQUEST {
        tracing::Level::WARN
    } else {
        tracing::Level::INFO
    }
}
