use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Response bodies are the flat `{"error": "..."}` shape clients match on;
/// the 4xx messages are part of the API contract and must not change.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Failed to extract job description from URL")]
    ExtractionFailed,

    #[error("Generation error: {0}")]
    Generation(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingFields => (StatusCode::BAD_REQUEST, "Missing required fields"),
            AppError::ExtractionFailed => (
                StatusCode::BAD_REQUEST,
                "Failed to extract job description from URL",
            ),
            AppError::Generation(detail) => {
                tracing::error!("Resume generation failed: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate resume",
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
