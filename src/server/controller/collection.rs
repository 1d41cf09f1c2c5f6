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
        collection::{
            AttachCollectionsDto, CollectionDto, CreateCollectionDto, OutletCollectionDto,
            TierQuery,
        },
        outlet::OutletDto,
    },
    server::{error::Error, model::app::AppState, service::collection::CollectionService},
};

pub static COLLECTION_TAG: &str = "collection";

/// Create a tiered collection with its liquor items
#[utoipa::path(
    post,
    path = "/api/collection",
    tag = COLLECTION_TAG,
    request_body = CreateCollectionDto,
    responses(
        (status = 201, description = "Collection created", body = CollectionDto),
        (status = 400, description = "Invalid collection or liquor items", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_collection(
    State(state): State<AppState>,
    Json(payload): Json<CreateCollectionDto>,
) -> Result<impl IntoResponse, Error> {
    let collection_service = CollectionService::new(&state.db);

    let collection = collection_service.create_collection(payload).await?;

    Ok((StatusCode::CREATED, Json(collection)))
}

/// Get a collection with its liquor items
#[utoipa::path(
    get,
    path = "/api/collection/{id}",
    tag = COLLECTION_TAG,
    params(("id" = Uuid, Path, description = "Collection ID")),
    responses(
        (status = 200, description = "Collection found", body = CollectionDto),
        (status = 404, description = "Collection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_collection(
    State(state): State<AppState>,
    Path(collection_id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let collection_service = CollectionService::new(&state.db);

    let collection = collection_service.get_collection(collection_id).await?;

    Ok((StatusCode::OK, Json(collection)))
}

/// Attach collections to empty tiers of an outlet
///
/// Naming a tier the outlet already holds rejects the whole request.
#[utoipa::path(
    patch,
    path = "/api/outlet/{id}/collection",
    tag = COLLECTION_TAG,
    params(("id" = Uuid, Path, description = "Outlet ID")),
    request_body = AttachCollectionsDto,
    responses(
        (status = 200, description = "Collections attached", body = OutletDto),
        (status = 400, description = "No tier given or collection of the wrong tier", body = ErrorDto),
        (status = 404, description = "Outlet or collection not found", body = ErrorDto),
        (status = 409, description = "Tier already assigned", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn attach_collections(
    State(state): State<AppState>,
    Path(outlet_id): Path<Uuid>,
    Json(payload): Json<AttachCollectionsDto>,
) -> Result<impl IntoResponse, Error> {
    let collection_service = CollectionService::new(&state.db);

    let outlet = collection_service
        .attach_collections(outlet_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(outlet)))
}

/// Get an outlet with the collection it holds for one tier
#[utoipa::path(
    get,
    path = "/api/outlet/{id}/collection",
    tag = COLLECTION_TAG,
    params(
        ("id" = Uuid, Path, description = "Outlet ID"),
        TierQuery
    ),
    responses(
        (status = 200, description = "Tier collection found", body = OutletCollectionDto),
        (status = 404, description = "Outlet not found or tier empty", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_outlet_collection(
    State(state): State<AppState>,
    Path(outlet_id): Path<Uuid>,
    Query(query): Query<TierQuery>,
) -> Result<impl IntoResponse, Error> {
    let collection_service = CollectionService::new(&state.db);

    let collection = collection_service
        .get_outlet_collection(outlet_id, query.tier)
        .await?;

    Ok((StatusCode::OK, Json(collection)))
}
