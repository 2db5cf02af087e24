use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::intake::IntakeError;

/// Application-level error type for the JSON and form endpoints.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Insight failures never show up here: they are recovered by the fallback.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Malformed intake form: {0}")]
    Intake(#[from] IntakeError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Intake(e) => {
                tracing::warn!("Rejected intake submission: {e}");
                (StatusCode::BAD_REQUEST, "MALFORMED_FORM", e.to_string())
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
