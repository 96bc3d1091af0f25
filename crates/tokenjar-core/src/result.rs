//! Convenience result type alias for TokenJar.

use crate::error::AppError;

/// A specialized `Result` type for TokenJar operations.
pub type AppResult<T> = Result<T, AppError>;
