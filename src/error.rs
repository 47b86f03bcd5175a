//! Application error types and HTTP response mapping.
//!
//! Every failure surfaced by the services is one of the [`AppError`] variants.
//! The HTTP boundary maps them to status codes via [`IntoResponse`]:
//!
//! | Variant                 | Status |
//! |-------------------------|--------|
//! | `Validation`            | 400    |
//! | `InvalidInput`          | 400    |
//! | `InvalidClick`          | 400    |
//! | `InvalidReference`      | 400    |
//! | `DuplicateConversion`   | 409    |
//! | `StoreUnavailable`      | 503    |
//! | `Internal`              | 500    |
//!
//! Response bodies follow the postback wire format:
//! `{"status":"error","message":...,"errors":[...]?}`. Internal detail is
//! logged but never sent to the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    status: &'static str,
    message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<String>>,
}

/// Service-level error kinds.
#[derive(Debug, Error)]
pub enum AppError {
    /// One or more field-level violations; all are reported together.
    #[error("Validation failed")]
    Validation { errors: Vec<String> },

    /// A single malformed input, reported as the response message itself
    /// rather than an error list.
    #[error("{message}")]
    InvalidInput { message: String },

    /// A postback referenced a click that was never registered for the
    /// given affiliate.
    #[error("Invalid click")]
    InvalidClick,

    /// A write referenced a related record (affiliate, campaign) that does
    /// not exist.
    #[error("Invalid reference - related record not found")]
    InvalidReference,

    /// The referenced click already has a conversion.
    #[error("Conversion already tracked for this click")]
    DuplicateConversion,

    /// The underlying store is unreachable.
    #[error("Database connection failed")]
    StoreUnavailable,

    /// Anything else. The message is logged, not returned to the caller.
    #[error("Internal server error")]
    Internal { message: String },
}

impl AppError {
    pub fn validation(errors: Vec<String>) -> Self {
        Self::Validation { errors }
    }

    /// A single-violation input failure, used by the query side for
    /// malformed affiliate identifiers.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Status code this error maps to at the HTTP boundary.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. }
            | AppError::InvalidInput { .. }
            | AppError::InvalidClick
            | AppError::InvalidReference => StatusCode::BAD_REQUEST,
            AppError::DuplicateConversion => StatusCode::CONFLICT,
            AppError::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        let errors = match self {
            AppError::Validation { errors } => Some(errors),
            AppError::Internal { message } => {
                tracing::error!(detail = %message, "internal error");
                None
            }
            AppError::StoreUnavailable => {
                tracing::error!("database unreachable");
                None
            }
            _ => None,
        };

        let body = ErrorBody {
            status: "error",
            message,
            errors,
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                AppError::StoreUnavailable
            }
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                if db.constraint() == Some("conversions_click_id_key") {
                    AppError::DuplicateConversion
                } else {
                    AppError::internal(format!("unexpected unique violation: {db}"))
                }
            }
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                AppError::InvalidReference
            }
            _ => AppError::internal(e.to_string()),
        }
    }
}
