use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use thiserror::Error;
use tracing::{error, warn};

use crate::models::ErrorBody;

/// Failures surfaced by the HTTP layer. The graphic engine itself cannot fail.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Prompt is required")] MissingPrompt,
    #[error("Primary color is required")] MissingColor,
    #[error("Invalid request body: {0}")] InvalidBody(String),
    #[error("Graphic not found")] NotFound,
    #[error("Internal: {0}")] Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingPrompt | ApiError::MissingColor | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing text; internals stay in the log.
    fn public_message(&self) -> String {
        match self {
            ApiError::InvalidBody(_) => "Invalid request body".to_string(),
            ApiError::Internal(_) => "Unable to generate graphic. Please try again.".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal(detail) => error!("❌ /api/generate error: {}", detail),
            other => warn!("⚠️ Rejected request: {}", other),
        }
        (self.status(), Json(ErrorBody { error: self.public_message() })).into_response()
    }
}
