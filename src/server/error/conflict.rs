use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::sea_orm_active_enums::{CollectionTier, DayOfWeek};
use thiserror::Error;

use crate::model::api::{ErrorDto, ErrorKind};

/// Valid input that the current state of a record does not allow
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConflictError {
    #[error("{0} collection is already assigned to this outlet")]
    TierAlreadyAssigned(CollectionTier),
    #[error("Outlet already has an infinity pass")]
    InfinityPassAlreadyAttached,
    #[error("A time slot for {0} already exists on this timing")]
    SlotDayTaken(DayOfWeek),
    #[error("An owner with this mobile number already exists")]
    OwnerMobileTaken,
    #[error("A referenced part is already linked to another outlet")]
    PartAlreadyLinked,
}

impl IntoResponse for ConflictError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected conflicting request: {}", self);

        (
            StatusCode::CONFLICT,
            Json(ErrorDto {
                kind: ErrorKind::Conflict,
                error: self.to_string(),
                field: None,
            }),
        )
            .into_response()
    }
}
