use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use breed_common::error::CommonError;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Common(#[from] CommonError),

    #[error("config error: {0}")]
    Config(String),

    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("dog breed not found: {0}")]
    NotFound(String),

    #[error("failed to fetch dog breeds: {0}")]
    Fetch(#[source] CommonError),

    #[error("failed to compute recommendations: {0}")]
    Recommend(#[source] CommonError),
}

/// JSON error envelope returned to clients.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::MalformedPayload(message) => {
                (StatusCode::BAD_REQUEST, message.clone(), None)
            }
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "Dog breed not found".to_string(), None),
            AppError::Fetch(source) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch dog breeds".to_string(),
                Some(source.to_string()),
            ),
            AppError::Recommend(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to compute recommendations".to_string(),
                None,
            ),
            AppError::Common(_) | AppError::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                None,
            ),
        };
        (status, Json(ErrorBody { error, details })).into_response()
    }
}
