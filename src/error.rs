// Errors surfaced to HTTP clients

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Ingestion payload could not be mapped to `{host: [device, ...]}`.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("malformed input: {0}")]
    MalformedInput(#[from] serde_json::Error),
}

/// Errors returned by the read endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("host not found: {0}")]
    HostNotFound(String),
}

fn error_body(status: StatusCode, message: String) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

impl IntoResponse for IngestError {
    fn into_response(self) -> Response {
        error_body(StatusCode::BAD_REQUEST, self.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::HostNotFound(_) => error_body(StatusCode::NOT_FOUND, self.to_string()),
        }
    }
}
