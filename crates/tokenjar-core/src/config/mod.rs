//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate, layered with `TOKENJAR_`-prefixed environment variables.
//! Each sub-module represents a logical configuration section.

pub mod app;
pub mod auth;
pub mod environment;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::ServerConfig;
pub use self::auth::AuthConfig;
pub use self::environment::Environment;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "TOKENJAR";

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment environment. Always overwritten by the value passed to
    /// [`AppConfig::load`], so the file never decides it.
    #[serde(default)]
    pub environment: Environment,
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Session signing settings.
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the `config/` directory.
    ///
    /// Merges `config/default.toml` with `config/{env}.toml` and environment
    /// variables prefixed with `TOKENJAR_` (nested keys separated by `__`).
    pub fn load(env: Environment) -> Result<Self, AppError> {
        Self::build(
            config::Config::builder()
                .add_source(config::File::with_name("config/default").required(false))
                .add_source(
                    config::File::with_name(&format!("config/{}", env.as_str())).required(false),
                ),
            env_overrides(),
            env,
        )
    }

    /// Load configuration from an explicit file, still honoring
    /// `TOKENJAR_` environment overrides.
    pub fn load_from_file(path: &str, env: Environment) -> Result<Self, AppError> {
        Self::build(
            config::Config::builder().add_source(config::File::with_name(path).required(true)),
            env_overrides(),
            env,
        )
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        overrides: config::Environment,
        env: Environment,
    ) -> Result<Self, AppError> {
        let config = builder
            .add_source(overrides)
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let mut app: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        app.environment = env;
        Ok(app)
    }

    /// Returns a copy suitable for display, with secrets masked.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        copy.auth.jwt_secret = "********".to_string();
        copy
    }
}

/// `TOKENJAR_AUTH__JWT_SECRET` → `auth.jwt_secret`: one underscore after
/// the prefix, two between nested keys.
fn env_overrides() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
