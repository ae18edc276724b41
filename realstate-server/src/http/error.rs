//! API error types with IntoResponse
//!
//! Every failure becomes `{"StatusCode", "ErrorCode", "Message"}` with a
//! matching HTTP status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::RealStateError;

/// Symbolic error code carried in error bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    BadRequest,
    ResourceNotFound,
    ApplicationError,
    UnexpectedError,
    ServiceUnavailable,
}

impl ErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::ResourceNotFound => StatusCode::NOT_FOUND,
            Self::ApplicationError | Self::UnexpectedError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::BadRequest => "something is wrong within your request",
            Self::ResourceNotFound => "resource not found",
            Self::ApplicationError => "application internal error",
            Self::UnexpectedError => "unexpected error",
            Self::ServiceUnavailable => "store unavailable",
        }
    }
}

/// JSON error body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub error_code: ErrorCode,
    pub message: String,
}

impl From<ErrorCode> for ErrorBody {
    fn from(code: ErrorCode) -> Self {
        Self {
            status_code: code.status().as_u16(),
            error_code: code,
            message: code.message().to_string(),
        }
    }
}

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Unreadable body or path parameter (400). Never reaches the service.
    BadRequest { reason: String },

    /// Failure reported by the service
    Service(RealStateError),

    /// Store did not answer the health ping (503)
    Unavailable(sqlx::Error),
}

impl ApiError {
    pub fn bad_request(reason: impl Into<String>) -> Self {
        Self::BadRequest {
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::BadRequest { .. } => ErrorCode::BadRequest,
            Self::Service(RealStateError::NotFound) => ErrorCode::ResourceNotFound,
            Self::Service(RealStateError::Internal(_)) => ErrorCode::ApplicationError,
            Self::Service(_) => ErrorCode::UnexpectedError,
            Self::Unavailable(_) => ErrorCode::ServiceUnavailable,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.code();

        match &self {
            Self::BadRequest { reason } => tracing::debug!(%reason, "rejected request"),
            Self::Service(RealStateError::NotFound) => {}
            // Log the actual error, return the generic body
            Self::Service(e) => tracing::error!(error = ?e, code = ?code, "request failed"),
            Self::Unavailable(e) => tracing::warn!(error = %e, "store health check failed"),
        }

        (code.status(), Json(ErrorBody::from(code))).into_response()
    }
}

impl From<RealStateError> for ApiError {
    fn from(e: RealStateError) -> Self {
        Self::Service(e)
    }
}
