//! API error type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use depviz_core::GraphError;

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// API error carrying an HTTP status code.
///
/// Serialized as `{ "error": <message> }`, the shape the front end expects.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ApiError {
    /// HTTP status code
    pub status: StatusCode,

    /// Error message
    pub message: String,
}

impl ApiError {
    /// 400 Bad Request
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// 500 Internal Server Error
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<GraphError> for ApiError {
    /// Root validation failures and filesystem errors all surface as 500
    /// with the error's message; nothing else escapes the core.
    fn from(err: GraphError) -> Self {
        Self::internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}
