//! Blog Data API — error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use blogdata_core::error::ContentError;
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer wrapper around `ContentError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub ContentError);

impl From<ContentError> for ApiError {
    fn from(err: ContentError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self.0 {
            ContentError::ContentUnavailable { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "content_unavailable")
            }
            ContentError::MalformedEntry { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "malformed_entry")
            }
        };

        tracing::error!(error = %self.0, error_code, "request failed");

        let body = ErrorBody {
            error: error_code,
            message: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
