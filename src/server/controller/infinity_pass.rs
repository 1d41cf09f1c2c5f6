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
        infinity_pass::{CreateInfinityPassDto, OutletInfinityPassDto},
    },
    server::{error::Error, model::app::AppState, service::infinity_pass::InfinityPassService},
};

pub static INFINITY_PASS_TAG: &str = "infinity-pass";

/// Create an infinity pass and link it to the outlet
#[utoipa::path(
    post,
    path = "/api/outlet/{id}/infinity-pass",
    tag = INFINITY_PASS_TAG,
    params(("id" = Uuid, Path, description = "Outlet ID")),
    request_body = CreateInfinityPassDto,
    responses(
        (status = 201, description = "Infinity pass created", body = OutletInfinityPassDto),
        (status = 400, description = "Invalid time window, days or amounts", body = ErrorDto),
        (status = 404, description = "Outlet not found", body = ErrorDto),
        (status = 409, description = "Outlet already has an infinity pass", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_infinity_pass(
    State(state): State<AppState>,
    Path(outlet_id): Path<Uuid>,
    Json(payload): Json<CreateInfinityPassDto>,
) -> Result<impl IntoResponse, Error> {
    let infinity_pass_service = InfinityPassService::new(&state.db);

    let pass = infinity_pass_service.create(outlet_id, payload).await?;

    Ok((StatusCode::CREATED, Json(pass)))
}

/// Get an outlet with its infinity pass
#[utoipa::path(
    get,
    path = "/api/outlet/{id}/infinity-pass",
    tag = INFINITY_PASS_TAG,
    params(("id" = Uuid, Path, description = "Outlet ID")),
    responses(
        (status = 200, description = "Infinity pass found", body = OutletInfinityPassDto),
        (status = 404, description = "Outlet not found or no pass attached", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_infinity_pass(
    State(state): State<AppState>,
    Path(outlet_id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let infinity_pass_service = InfinityPassService::new(&state.db);

    let pass = infinity_pass_service.get(outlet_id).await?;

    Ok((StatusCode::OK, Json(pass)))
}
