//! Error types for the Pegman server application.
//!
//! Each concern has its own `thiserror` enum. Validation, missing records and state
//! conflicts are aggregated by [`Error`]; configuration errors stop startup before any
//! request is served. Every error implements `IntoResponse` so handlers can return
//! `Result<_, Error>` and let `?` pick the status code.

pub mod config;
pub mod conflict;
pub mod not_found;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, ErrorKind},
    server::error::{
        conflict::ConflictError, not_found::NotFoundError, validation::ValidationError,
    },
};

/// Main error type for the Pegman server application.
///
/// Aggregates the domain-specific error types and external library errors into a single
/// type. `#[from]` conversions let the `?` operator lift any of them. The `IntoResponse`
/// implementation maps each category to its HTTP status.
///
/// # Error Categories
/// - Validation errors (malformed input, detected before any write)
/// - Not found errors (a referenced record does not exist)
/// - Conflict errors (valid input rejected by current state)
/// - Database errors (query failures, aborted transactions)
#[derive(Error, Debug)]
pub enum Error {
    /// Input failed validation; nothing was written.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// A referenced record does not exist.
    #[error(transparent)]
    NotFoundError(#[from] NotFoundError),
    /// The current state of a record disallows the requested change.
    #[error(transparent)]
    ConflictError(#[from] ConflictError),
    /// Internal error indicating a bug in Pegman's code.
    ///
    /// This error should never occur in normal operation, for example a foreign key that
    /// points at a row the database claims does not exist.
    #[error("Internal error with Pegman's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] DbErr),
    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// Translate a unique or primary key violation into the given conflict.
    ///
    /// Any other database error is passed through unchanged.
    pub fn on_unique_violation(err: DbErr, conflict: ConflictError) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::ConflictError(conflict),
            _ => Self::DbErr(err),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For validation errors
/// - 404 Not Found - For missing records
/// - 409 Conflict - For state conflicts such as an already assigned tier
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationError(err) => err.into_response(),
            Self::NotFoundError(err) => err.into_response(),
            Self::ConflictError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                kind: ErrorKind::Internal,
                error: "Internal server error".to_string(),
                field: None,
            }),
        )
            .into_response()
    }
}
