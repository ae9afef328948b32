/*
 * Responsibility
 * - app-wide AppError definition
 * - IntoResponse impl (HTTP status / body)
 * - decode failures and file-read failures are converted here, uniformly
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::claims::DecodeError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    // Deliberately 404 (not 401), matching the contract consumers of this
    // stub already depend on. The body must be exactly "Unauthorized".
    #[error("unauthorized")]
    Unauthorized,
    #[error("internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthorized => (StatusCode::NOT_FOUND, "Unauthorized").into_response(),
            AppError::Internal => {
                let body = ErrorResponse {
                    error: ErrorBody {
                        code: "INTERNAL_SERVER_ERROR",
                        message: "internal server error".into(),
                    },
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

impl From<DecodeError> for AppError {
    fn from(_: DecodeError) -> Self {
        // All decode sub-failures collapse to the same client-visible outcome.
        AppError::Unauthorized
    }
}
