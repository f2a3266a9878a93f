//! Route handlers.

pub mod analyze;
pub mod health;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fanseo_core::SeoError;
use serde_json::json;

/// Error returned by API handlers.
#[derive(Debug)]
pub enum ApiError {
    /// 400 with `{error}`.
    BadRequest(String),
    /// 500 with `{error, message}`.
    Internal(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }
}

impl From<SeoError> for ApiError {
    fn from(err: SeoError) -> Self {
        match err {
            SeoError::ValidationError(msg) => Self::BadRequest(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(error) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": error }))).into_response()
            }
            Self::Internal(message) => {
                tracing::error!(%message, "Analysis failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Analysis failed", "message": message })),
                )
                    .into_response()
            }
        }
    }
}
