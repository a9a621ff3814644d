use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use feedmix::FeedError;
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, ApiError>`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid parameter: {0}")]
    Validation(String),

    #[error("internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<FeedError> for ApiError {
    fn from(e: FeedError) -> Self {
        match e {
            FeedError::InvalidArg(msg) => Self::Validation(msg),
            other => Self::Internal(other.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Validation(msg) => {
                tracing::info!("rejected request: {msg}");
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            ApiError::Internal(e) => {
                tracing::error!("internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
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
