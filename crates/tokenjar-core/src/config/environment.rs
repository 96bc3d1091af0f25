//! Deployment environment selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Environment variable naming the deployment environment.
pub const ENV_VAR: &str = "TOKENJAR_ENV";

/// The environment the process runs in. Read once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development.
    #[default]
    Development,
    /// Automated tests.
    Test,
    /// Production deployment; session cookies are marked `Secure`.
    Production,
}

impl Environment {
    /// Reads [`ENV_VAR`], defaulting to development when unset.
    pub fn from_env() -> Result<Self, AppError> {
        match std::env::var(ENV_VAR) {
            Ok(value) => value.parse(),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Whether this is a production deployment.
    pub fn is_production(self) -> bool {
        self == Self::Production
    }

    /// Lowercase name, matching the overlay file name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "test" => Ok(Self::Test),
            "production" | "prod" => Ok(Self::Production),
            other => Err(AppError::configuration(format!(
                "Unknown environment '{other}'"
            ))),
        }
    }
}
