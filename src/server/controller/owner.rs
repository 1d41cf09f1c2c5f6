use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        outlet::OutletExpandQuery,
        owner::{OwnerDto, RegisterOwnerDto, UpdateOwnerDto},
    },
    server::{
        error::Error,
        model::{app::AppState, expansion::OutletExpansion},
        service::owner::OwnerService,
    },
};

pub static OWNER_TAG: &str = "owner";

/// Register an owner by mobile number
///
/// Registering a known number returns the existing owner.
#[utoipa::path(
    post,
    path = "/api/owner",
    tag = OWNER_TAG,
    request_body = RegisterOwnerDto,
    responses(
        (status = 201, description = "Owner registered", body = OwnerDto),
        (status = 200, description = "Owner already registered", body = OwnerDto),
        (status = 400, description = "Invalid mobile number or ISD code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_owner(
    State(state): State<AppState>,
    Json(payload): Json<RegisterOwnerDto>,
) -> Result<impl IntoResponse, Error> {
    let owner_service = OwnerService::new(&state.db);

    let (owner, created) = owner_service.register(payload).await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(owner)))
}

/// Get an owner with their outlets, each expanded by the query flags
#[utoipa::path(
    get,
    path = "/api/owner/{id}",
    tag = OWNER_TAG,
    params(
        ("id" = Uuid, Path, description = "Owner ID"),
        OutletExpandQuery
    ),
    responses(
        (status = 200, description = "Owner found", body = OwnerDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owner(
    State(state): State<AppState>,
    Path(owner_id): Path<Uuid>,
    Query(query): Query<OutletExpandQuery>,
) -> Result<impl IntoResponse, Error> {
    let owner_service = OwnerService::new(&state.db);

    let expansion = OutletExpansion::from(&query);
    let owner = owner_service.get_owner(owner_id, &expansion).await?;

    Ok((StatusCode::OK, Json(owner)))
}

/// Update an owner's name and email
#[utoipa::path(
    put,
    path = "/api/owner/{id}",
    tag = OWNER_TAG,
    params(("id" = Uuid, Path, description = "Owner ID")),
    request_body = UpdateOwnerDto,
    responses(
        (status = 200, description = "Owner updated", body = OwnerDto),
        (status = 400, description = "Invalid name or email", body = ErrorDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_owner(
    State(state): State<AppState>,
    Path(owner_id): Path<Uuid>,
    Json(payload): Json<UpdateOwnerDto>,
) -> Result<impl IntoResponse, Error> {
    let owner_service = OwnerService::new(&state.db);

    let owner = owner_service.update_profile(owner_id, payload).await?;

    Ok((StatusCode::OK, Json(owner)))
}
