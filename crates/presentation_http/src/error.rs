//! API error handling
//!
//! Maps application errors onto HTTP status codes with a uniform JSON body.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Provider failure: {0}")]
    BadGateway(String),

    #[error("Lookup timed out: {0}")]
    GatewayTimeout(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            Self::BadGateway(msg) => (StatusCode::BAD_GATEWAY, "provider_failure", msg),
            Self::GatewayTimeout(msg) => (StatusCode::GATEWAY_TIMEOUT, "lookup_timeout", msg),
            Self::Internal(_) => {
                // Internal details stay in the logs, not in responses
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            },
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            ApplicationError::Provider(e) => Self::BadGateway(e.to_string()),
            ApplicationError::DeadlineElapsed(deadline) => {
                Self::GatewayTimeout(format!("No provider answered within {deadline:?}"))
            },
            ApplicationError::Cache(msg) | ApplicationError::Internal(msg) => Self::Internal(msg),
        }
    }
}
