//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use tokenjar_auth::SessionManager;
use tokenjar_core::config::AppConfig;
use tokenjar_core::error::AppError;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Session lifecycle manager
    pub session_manager: Arc<SessionManager>,
}

impl AppState {
    /// Builds the state from configuration. Fails if the signing secret is unusable.
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let session_manager = SessionManager::new(&config.auth, config.environment)?;
        Ok(Self {
            config: Arc::new(config),
            session_manager: Arc::new(session_manager),
        })
    }
}
