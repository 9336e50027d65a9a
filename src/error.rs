use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use luach_recurrence::RecurrenceError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    InvalidDate(#[from] RecurrenceError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, message) = match self {
            AppError::ValidationError(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::InvalidDate(RecurrenceError::InvalidDate(msg)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, msg)
            }
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}
