use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::research::registry::UnknownOperation;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// A malformed or empty model response is deliberately absent here: those are
/// recovered into fallback answer strings by the prompt processor.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    UnknownOperation(#[from] UnknownOperation),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Request refused before its body could be read as JSON (size, content type).
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: StatusCode, message: String },

    #[error("LLM error: {0}")]
    Llm(String),
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::UnknownOperation(e) => {
                (StatusCode::BAD_REQUEST, "UNKNOWN_OPERATION", e.to_string())
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Rejected { status, message } => {
                (*status, "REQUEST_REJECTED", message.clone())
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "The language model request failed".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
