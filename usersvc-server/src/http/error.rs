//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Store failures are logged in full; the client only sees the cause when
//! the server runs in development mode.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::models::{ValidationError, Violations};
use crate::service::ServiceError;

/// Message returned for store failures outside development mode
const GENERIC_INTERNAL_MESSAGE: &str = "Internal server error";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Field rule violations (400, `{"errors": [...]}`)
    Validation(Violations),

    /// Unreadable request, e.g. malformed JSON (400)
    BadRequest { message: String },

    /// Resource not found (404)
    NotFound { message: String },

    /// Store or other server-side failure (500, logged)
    Internal {
        context: &'static str,
        cause: String,
        expose_detail: bool,
    },
}

impl ApiError {
    /// Map a service failure, deciding now whether store detail may leave
    /// the process.
    pub fn from_service(err: ServiceError, expose_detail: bool) -> Self {
        match err {
            ServiceError::InvalidArgument(e) => Self::Validation(e.into()),
            ServiceError::ValidationFailed(v) => Self::Validation(v),
            ServiceError::NotFound(_) => Self::NotFound {
                message: "User not found".into(),
            },
            ServiceError::StoreUnavailable { context, source } => Self::Internal {
                context,
                cause: source.to_string(),
                expose_detail,
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn violation_body(err: &ValidationError) -> Value {
    json!({
        "field": err.field(),
        "message": err.to_string(),
    })
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation(violations) => json!({
                "errors": violations.iter().map(violation_body).collect::<Vec<_>>()
            }),
            Self::BadRequest { message } | Self::NotFound { message } => json!({
                "error": message
            }),
            Self::Internal {
                context,
                cause,
                expose_detail,
            } => {
                // Log the actual error, return generic message
                tracing::error!(error = %cause, "{}", context);
                let message = if expose_detail {
                    format!("{}: {}", context, cause)
                } else {
                    GENERIC_INTERNAL_MESSAGE.to_owned()
                };
                json!({ "error": message })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e.into())
    }
}

impl From<Violations> for ApiError {
    fn from(v: Violations) -> Self {
        Self::Validation(v)
    }
}
