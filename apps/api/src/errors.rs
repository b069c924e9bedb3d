use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::output_parser::ParseValidationError;
use crate::llm_client::GenerationError;

/// Failure of a structured pipeline: the model call failed, or its reply was rejected.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    ParseValidation(#[from] ParseValidationError),
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Parse validation error: {0}")]
    ParseValidation(#[from] ParseValidationError),
}

impl From<AssistantError> for AppError {
    fn from(err: AssistantError) -> Self {
        match err {
            AssistantError::Generation(e) => AppError::Generation(e),
            AssistantError::ParseValidation(e) => AppError::ParseValidation(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Generation(e) => {
                tracing::error!("Generation error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "GENERATION_ERROR",
                    "The language model could not be reached".to_string(),
                )
            }
            AppError::ParseValidation(e) => {
                tracing::warn!("Rejected model output: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "PARSE_VALIDATION_ERROR",
                    e.to_string(),
                )
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
