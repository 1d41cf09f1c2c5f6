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
        outlet::{
            CreateLegalDocumentDto, CreateOutletDto, CreateOutletStaffDto, LegalDocumentDto,
            LinkOutletDto, OutletDto, OutletExpandQuery, OutletStaffDto, VerifyOutletDto,
        },
    },
    server::{
        error::Error,
        model::{app::AppState, expansion::OutletExpansion},
        service::{outlet::OutletService, verification::VerificationService},
    },
};

pub static OUTLET_TAG: &str = "outlet";

/// Create an outlet together with its details, legal document, manager, timing and
/// optional bartender
///
/// All parts are written in one transaction; if any fails nothing is stored.
#[utoipa::path(
    post,
    path = "/api/outlet",
    tag = OUTLET_TAG,
    request_body = CreateOutletDto,
    responses(
        (status = 201, description = "Outlet created", body = OutletDto),
        (status = 400, description = "Invalid outlet payload", body = ErrorDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_outlet(
    State(state): State<AppState>,
    Json(payload): Json<CreateOutletDto>,
) -> Result<impl IntoResponse, Error> {
    let outlet_service = OutletService::new(&state.db);

    let outlet = outlet_service.create_outlet(payload).await?;

    Ok((StatusCode::CREATED, Json(outlet)))
}

/// Create an outlet from details, legal document, manager, timing and bartender records
/// that already exist
#[utoipa::path(
    post,
    path = "/api/outlet/link",
    tag = OUTLET_TAG,
    request_body = LinkOutletDto,
    responses(
        (status = 201, description = "Outlet created", body = OutletDto),
        (status = 400, description = "Invalid outlet name", body = ErrorDto),
        (status = 404, description = "A referenced record was not found", body = ErrorDto),
        (status = 409, description = "A referenced record already belongs to an outlet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn link_outlet(
    State(state): State<AppState>,
    Json(payload): Json<LinkOutletDto>,
) -> Result<impl IntoResponse, Error> {
    let outlet_service = OutletService::new(&state.db);

    let outlet = outlet_service.link_outlet(payload).await?;

    Ok((StatusCode::CREATED, Json(outlet)))
}

/// Get an outlet, expanding the relations selected by the query flags
#[utoipa::path(
    get,
    path = "/api/outlet/{id}",
    tag = OUTLET_TAG,
    params(
        ("id" = Uuid, Path, description = "Outlet ID"),
        OutletExpandQuery
    ),
    responses(
        (status = 200, description = "Outlet found", body = OutletDto),
        (status = 404, description = "Outlet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_outlet(
    State(state): State<AppState>,
    Path(outlet_id): Path<Uuid>,
    Query(query): Query<OutletExpandQuery>,
) -> Result<impl IntoResponse, Error> {
    let outlet_service = OutletService::new(&state.db);

    let expansion = OutletExpansion::from(&query);
    let outlet = outlet_service.get_outlet(outlet_id, &expansion).await?;

    Ok((StatusCode::OK, Json(outlet)))
}

/// Verify or un-verify an outlet
#[utoipa::path(
    patch,
    path = "/api/outlet/{id}/verify",
    tag = OUTLET_TAG,
    params(("id" = Uuid, Path, description = "Outlet ID")),
    request_body = VerifyOutletDto,
    responses(
        (status = 200, description = "Verification updated", body = OutletDto),
        (status = 404, description = "Outlet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_outlet(
    State(state): State<AppState>,
    Path(outlet_id): Path<Uuid>,
    Json(payload): Json<VerifyOutletDto>,
) -> Result<impl IntoResponse, Error> {
    let verification_service = VerificationService::new(&state.db);

    let outlet = verification_service
        .set_verified(outlet_id, payload.is_verified)
        .await?;

    Ok((StatusCode::OK, Json(outlet)))
}

/// Create outlet details, manager and optional bartender ahead of linking an outlet
#[utoipa::path(
    post,
    path = "/api/outlet-details",
    tag = OUTLET_TAG,
    request_body = CreateOutletStaffDto,
    responses(
        (status = 201, description = "Details created", body = OutletStaffDto),
        (status = 400, description = "Invalid details payload", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_outlet_details(
    State(state): State<AppState>,
    Json(payload): Json<CreateOutletStaffDto>,
) -> Result<impl IntoResponse, Error> {
    let outlet_service = OutletService::new(&state.db);

    let staff = outlet_service.create_staff(payload).await?;

    Ok((StatusCode::CREATED, Json(staff)))
}

/// Create a legal document ahead of linking an outlet
#[utoipa::path(
    post,
    path = "/api/outlet-legal-document",
    tag = OUTLET_TAG,
    request_body = CreateLegalDocumentDto,
    responses(
        (status = 201, description = "Legal document created", body = LegalDocumentDto),
        (status = 400, description = "Invalid legal document", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_legal_document(
    State(state): State<AppState>,
    Json(payload): Json<CreateLegalDocumentDto>,
) -> Result<impl IntoResponse, Error> {
    let outlet_service = OutletService::new(&state.db);

    let document = outlet_service.create_legal_document(payload).await?;

    Ok((StatusCode::CREATED, Json(document)))
}
