//! # Web API Error Types
//!
//! Error types specific to the web API and their HTTP response conversions.
//! Leverages thiserror for structured error handling and Axum's
//! `IntoResponse` for HTTP conversion.
//!
//! Two wire shapes exist: validation rejections are `{"error": <message>}`,
//! comparison failures are `{"error": true, "message": <message>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Web API errors with HTTP status code mappings
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {message}")]
    BadRequest { message: String },

    #[error("Comparison failed: {message}")]
    ComparisonFailed { message: String },
}

impl ApiError {
    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create a comparison failure error
    pub fn comparison_failed(message: impl Into<String>) -> Self {
        Self::ComparisonFailed {
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": message })),
            )
                .into_response(),
            Self::ComparisonFailed { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": true, "message": message })),
            )
                .into_response(),
        }
    }
}
