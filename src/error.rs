//! Application error type and its JSON rendering.
//!
//! Every failure that reaches the HTTP layer is an [`AppError`]. Its
//! [`IntoResponse`] implementation renders the production body
//! (`{message, error: {status}}`) and attaches an [`ErrorReport`] to the
//! response extensions, so the terminal error middleware can re-render the
//! body with a stack when running in development mode
//! (see [`crate::api::middleware::errors`]).

use std::error::Error as _;
use std::fmt::Write as _;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Errors surfaced by services, repositories and handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Client input was rejected (400).
    #[error("{0}")]
    Validation(String),

    /// Request origin is not on the CORS allow-list (403).
    #[error("{0}")]
    Forbidden(String),

    /// Unknown slug, empty collection or unmatched route (404).
    #[error("{0}")]
    NotFound(String),

    /// A store uniqueness constraint rejected a write (409).
    ///
    /// The condense workflow absorbs these; one only reaches a client if a
    /// caller writes to the store directly.
    #[error("{message}")]
    Conflict {
        message: String,
        constraint: Option<String>,
    },

    /// Failure propagated from the record store (500).
    #[error("Database error")]
    Store(#[source] sqlx::Error),

    /// Any other server-side failure (500).
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>, constraint: Option<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            constraint,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status this error is rendered with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Store(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Debug representation followed by the chain of underlying causes.
    pub fn stack(&self) -> String {
        let mut stack = format!("{self:?}");
        let mut source = self.source();
        while let Some(cause) = source {
            let _ = write!(stack, "\n    caused by: {cause}");
            source = cause.source();
        }
        stack
    }

    /// Snapshot of this error used for rendering.
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            status: self.status(),
            message: self.to_string(),
            stack: self.stack(),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Unique constraint violation",
                db.constraint().map(str::to_owned),
            );
        }

        AppError::Store(e)
    }
}

/// Rendered form of an [`AppError`], carried in response extensions.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub status: StatusCode,
    pub message: String,
    pub stack: String,
}

impl ErrorReport {
    /// Builds the JSON body, with the stack only when `expose_stack` is set.
    pub fn body(&self, expose_stack: bool) -> ErrorBody {
        ErrorBody {
            message: self.message.clone(),
            error: ErrorDetail {
                status: self.status.as_u16(),
                stack: expose_stack.then(|| self.stack.clone()),
            },
        }
    }

    /// Renders the report as a complete JSON response.
    pub fn into_response(self, expose_stack: bool) -> Response {
        let body = self.body(expose_stack);
        let mut response = (self.status, Json(body)).into_response();
        response.extensions_mut().insert(self);
        response
    }
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub status: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let report = self.report();

        if report.status.is_server_error() {
            tracing::error!(status = report.status.as_u16(), stack = %report.stack, "{}", report.message);
        }

        report.into_response(false)
    }
}
