//! Centralized error types for FanSEO.

use thiserror::Error;

/// Main error type for analysis operations.
#[derive(Error, Debug)]
pub enum SeoError {
    #[error("{0}")]
    ValidationError(String),
}

/// Result type for analysis operations.
pub type SeoResult<T> = Result<T, SeoError>;

impl SeoError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }
}
