//! Route definitions for the TokenJar HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(session_routes(&state))
        .merge(protected_routes(&state))
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Session endpoints: read, logout, and (optionally) direct issue.
fn session_routes(state: &AppState) -> Router<AppState> {
    let mut session = get(handlers::session::current).delete(handlers::session::logout);
    if state.config.auth.allow_direct_issue {
        session = session.post(handlers::session::issue);
    }

    Router::new()
        .route("/session", session)
        .route("/session/verify", get(handlers::session::verify))
}

/// Endpoints that require a verified session.
fn protected_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/me", get(handlers::session::me))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_session,
        ))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
