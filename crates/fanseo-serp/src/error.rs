//! Search provider error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SerpError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("DataForSEO API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("DataForSEO status {code}: {message}")]
    Provider { code: u32, message: String },

    #[error("No task in DataForSEO response")]
    NoTask,

    #[error("Task {0} not ready after polling")]
    NotReady(String),

    #[error("No organic results for task {0}")]
    NoResults(String),
}

/// Result type for search provider operations.
pub type SerpResult<T> = Result<T, SerpError>;
