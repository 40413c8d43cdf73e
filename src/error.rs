//! Application error type and its HTTP representation.
//!
//! Every failure that reaches the HTTP surface is rendered with the same body
//! shape:
//!
//! ```json
//! { "error": "ValidationError", "message": "name: must be between 2 and 100 characters" }
//! ```
//!
//! | Variant | Status | `error` |
//! |---|---|---|
//! | [`AppError::BadRequest`] | 400 | `BadRequest` |
//! | [`AppError::Validation`] | 400 | `ValidationError` |
//! | [`AppError::NotFound`] | 404 | `NotFound` |
//! | [`AppError::Internal`] | 500 | `ServerError` |

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;
use validator::{ValidationErrors, ValidationErrorsKind};

/// A single failed constraint on an input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Uniform JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request itself could not be decoded (body or path).
    #[error("{message}")]
    BadRequest { message: String },

    /// The request decoded but broke one or more field constraints.
    #[error("{}", join_violations(.violations))]
    Validation { violations: Vec<FieldViolation> },

    #[error("{message}")]
    NotFound { message: String },

    /// Storage or other infrastructure failure.
    #[error("{message}")]
    Internal { message: String },
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } | Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Category name used in the `error` field of the response body.
    pub fn category(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "BadRequest",
            Self::Validation { .. } => "ValidationError",
            Self::NotFound { .. } => "NotFound",
            Self::Internal { .. } => "ServerError",
        }
    }

    pub fn to_error_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.category(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.to_error_body())).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Database error");
        Self::internal(e.to_string())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut violations: Vec<FieldViolation> = errors
            .errors()
            .iter()
            .flat_map(|(field, kind)| {
                let field = field.to_string();
                match kind {
                    ValidationErrorsKind::Field(list) => list
                        .iter()
                        .map(|e| FieldViolation {
                            field: field.clone(),
                            message: e
                                .message
                                .as_ref()
                                .map(ToString::to_string)
                                .unwrap_or_else(|| e.code.to_string()),
                        })
                        .collect::<Vec<_>>(),
                    _ => vec![FieldViolation {
                        field,
                        message: "invalid".to_string(),
                    }],
                }
            })
            .collect();

        violations.sort_by(|a, b| a.field.cmp(&b.field));
        Self::Validation { violations }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(format!("Invalid input: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(_: PathRejection) -> Self {
        Self::bad_request("Invalid user ID")
    }
}
