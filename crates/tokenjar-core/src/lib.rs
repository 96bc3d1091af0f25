//! # tokenjar-core
//!
//! Core crate for TokenJar. Contains configuration schemas, the unified
//! error system, and the cookie transport capability used by the session
//! layer.
//!
//! This crate has **no** internal dependencies on other TokenJar crates.

pub mod config;
pub mod cookie;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
