//! API error handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use glaze_core::error::GlazeError;
use serde::Serialize;

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: String,
    message: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
            message: None,
        }
    }

    /// Attaches a detail message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Bad request error.
    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error)
    }

    /// Method not allowed error.
    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    }

    /// Provider failure (bad gateway).
    pub fn generation_failed(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, "Generation failed").with_message(message)
    }

    /// Internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal error").with_message(message)
    }
}

/// Error response body: `{ error }` for caller errors, `{ error, message }`
/// when there is provider or internal detail to surface.
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.error,
            message: self.message,
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<GlazeError> for ApiError {
    fn from(err: GlazeError) -> Self {
        match &err {
            GlazeError::ValidationError(msg) => ApiError::bad_request(msg.clone()),
            GlazeError::ConfigError(_) => ApiError::bad_request(err.to_string()),
            _ if err.is_provider_error() => ApiError::generation_failed(err.to_string()),
            _ => {
                tracing::error!(error = %err, "Internal error");
                ApiError::internal("An internal error occurred")
            }
        }
    }
}
