use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorDto, ErrorKind};

/// Input rejected before any storage call, scoped to the offending field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!(field = %self.field, "Rejected input: {}", self.message);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                kind: ErrorKind::Validation,
                error: self.message,
                field: Some(self.field),
            }),
        )
            .into_response()
    }
}
