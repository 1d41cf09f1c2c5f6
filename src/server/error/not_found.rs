use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::sea_orm_active_enums::CollectionTier;
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::{ErrorDto, ErrorKind};

/// A referenced record does not exist.
///
/// Variants carry the identifier that was looked up for logging. The display message is
/// what the client sees, so "no outlet" and "outlet without a pass" stay distinguishable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    #[error("Owner not found")]
    Owner(Uuid),
    #[error("Outlet not found")]
    Outlet(Uuid),
    #[error("Outlet details not found")]
    OutletDetails(Uuid),
    #[error("Legal document not found")]
    LegalDocument(Uuid),
    #[error("Manager not found")]
    Manager(Uuid),
    #[error("Bartender not found")]
    Bartender(Uuid),
    #[error("Outlet timing not found")]
    Timing(Uuid),
    #[error("Outlet timing slot not found")]
    TimingSlot(Uuid),
    #[error("Collection not found")]
    Collection(Uuid),
    #[error("{tier} collection not found")]
    TierCollection { outlet_id: Uuid, tier: CollectionTier },
    #[error("Outlet does not have an infinity pass")]
    InfinityPass(Uuid),
}

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        tracing::debug!("{}: {:?}", self, self);

        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                kind: ErrorKind::NotFound,
                error: self.to_string(),
                field: None,
            }),
        )
            .into_response()
    }
}
