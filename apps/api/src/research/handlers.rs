//! Axum route handlers for the research API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::research::processor::ProcessRequest;
use crate::research::registry::OperationInfo;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct OperationsResponse {
    pub operations: Vec<OperationInfo>,
}

/// POST /api/research/process
///
/// Returns the model's answer as plain text. A response the model left empty
/// or malformed still comes back as 200 with a fallback message.
pub async fn handle_process(
    State(state): State<AppState>,
    payload: Result<Json<ProcessRequest>, JsonRejection>,
) -> Result<String, AppError> {
    let Json(request) = payload.map_err(rejection_to_error)?;

    state.processor.process(&request).await
}

/// Malformed or incomplete JSON is a validation error; anything else
/// (oversized body, wrong content type) keeps Axum's status.
fn rejection_to_error(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
            AppError::Validation(rejection.body_text())
        }
        other => AppError::Rejected {
            status: other.status(),
            message: other.body_text(),
        },
    }
}

/// GET /api/research/operations
pub async fn handle_list_operations(State(state): State<AppState>) -> Json<OperationsResponse> {
    Json(OperationsResponse {
        operations: state.processor.registry().operations(),
    })
}
