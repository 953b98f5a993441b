use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Model client not initialized")]
    Uninitialized,

    #[error("LLM error: {detail}")]
    Llm {
        /// Generic message returned to the caller.
        message: String,
        /// Underlying failure, logged server-side only.
        detail: String,
    },
}

impl AppError {
    pub fn llm(message: &str, detail: impl ToString) -> Self {
        AppError::Llm {
            message: message.to_string(),
            detail: detail.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Uninitialized => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "MODEL_UNINITIALIZED",
                "Gemini client not initialized. Check your API key.".to_string(),
            ),
            AppError::Llm { message, detail } => {
                tracing::error!("LLM error: {detail}");
                (StatusCode::INTERNAL_SERVER_ERROR, "LLM_ERROR", message.clone())
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
