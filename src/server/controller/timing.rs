use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        timing::{AddTimingSlotDto, CreateTimingDto, TimingDto, TimingSlotDto, UpdateTimingSlotDto},
    },
    server::{error::Error, model::app::AppState, service::timing::TimingService},
};

pub static TIMING_TAG: &str = "timing";

/// Create a weekly opening hours schedule
#[utoipa::path(
    post,
    path = "/api/outlet-timing",
    tag = TIMING_TAG,
    request_body = CreateTimingDto,
    responses(
        (status = 201, description = "Timing created", body = TimingDto),
        (status = 400, description = "Empty, incomplete, inverted or duplicate-day slots", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_timing(
    State(state): State<AppState>,
    Json(payload): Json<CreateTimingDto>,
) -> Result<impl IntoResponse, Error> {
    let timing_service = TimingService::new(&state.db);

    let timing = timing_service.create_timing(payload).await?;

    Ok((StatusCode::CREATED, Json(timing)))
}

/// Add a slot to an existing schedule
#[utoipa::path(
    post,
    path = "/api/outlet-timing/{id}/slot",
    tag = TIMING_TAG,
    params(("id" = Uuid, Path, description = "Timing ID")),
    request_body = AddTimingSlotDto,
    responses(
        (status = 201, description = "Slot added", body = TimingSlotDto),
        (status = 400, description = "Opening time is not before closing time", body = ErrorDto),
        (status = 404, description = "Timing not found", body = ErrorDto),
        (status = 409, description = "The schedule already has a slot for that day", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_timing_slot(
    State(state): State<AppState>,
    Path(timing_id): Path<Uuid>,
    Json(payload): Json<AddTimingSlotDto>,
) -> Result<impl IntoResponse, Error> {
    let timing_service = TimingService::new(&state.db);

    let slot = timing_service.add_slot(timing_id, payload).await?;

    Ok((StatusCode::CREATED, Json(slot)))
}

/// Update any of a slot's day, opening time and closing time
#[utoipa::path(
    patch,
    path = "/api/outlet-timing-slot/{id}",
    tag = TIMING_TAG,
    params(("id" = Uuid, Path, description = "Timing slot ID")),
    request_body = UpdateTimingSlotDto,
    responses(
        (status = 200, description = "Slot updated", body = TimingSlotDto),
        (status = 400, description = "Opening time is not before closing time", body = ErrorDto),
        (status = 404, description = "Timing slot not found", body = ErrorDto),
        (status = 409, description = "The schedule already has a slot for that day", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_timing_slot(
    State(state): State<AppState>,
    Path(slot_id): Path<Uuid>,
    Json(payload): Json<UpdateTimingSlotDto>,
) -> Result<impl IntoResponse, Error> {
    let timing_service = TimingService::new(&state.db);

    let slot = timing_service.update_slot(slot_id, payload).await?;

    Ok((StatusCode::OK, Json(slot)))
}
