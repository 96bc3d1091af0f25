//! Application builder and server runner.

use std::time::Duration;

use axum::Router;
use tokio::sync::watch;

use tokenjar_core::config::AppConfig;
use tokenjar_core::error::AppError;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application from configuration.
pub fn build_app(config: AppConfig) -> Result<Router, AppError> {
    let state = AppState::new(config)?;
    Ok(build_router(state))
}

/// Runs the TokenJar server until Ctrl+C, then drains within the grace period.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    let addr = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    tracing::info!(
        environment = %config.environment,
        direct_issue = config.auth.allow_direct_issue,
        "Initializing session manager..."
    );
    let app = build_app(config)?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("TokenJar server listening on {}", addr);

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });
    let mut handle = tokio::spawn(async move { server.await });

    tokio::select! {
        joined = &mut handle => return flatten(joined),
        _ = shutdown_rx.changed() => {}
    }

    match tokio::time::timeout(grace, handle).await {
        Ok(joined) => flatten(joined),
        Err(_) => {
            tracing::warn!(grace_seconds = grace.as_secs(), "Connections still open after grace period");
            Ok(())
        }
    }
}

fn flatten(
    joined: Result<std::io::Result<()>, tokio::task::JoinError>,
) -> Result<(), AppError> {
    match joined {
        Ok(result) => result.map_err(|e| AppError::internal(format!("Server error: {}", e))),
        Err(e) => Err(AppError::internal(format!("Server task failed: {}", e))),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
