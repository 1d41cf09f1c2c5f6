//! Tests for the collection endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::CollectionTier;
use pegman::{
    model::collection::{AttachCollectionsDto, TierQuery},
    server::{
        controller::collection::{attach_collections, create_collection, get_outlet_collection},
        model::app::AppState,
    },
};
use pegman_test_utils::prelude::*;

use crate::util::collection_payload;

/// Expect 201 Created for a valid collection
#[tokio::test]
async fn create_collection_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;

    let result = create_collection(
        State(test.to_app_state::<AppState>()),
        Json(collection_payload(CollectionTier::Crystal)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 409 Conflict when the tier is already filled
#[tokio::test]
async fn attach_collections_returns_conflict_for_filled_tier() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;
    let outlet = test.outlet().insert_outlet(owner.id).await?;
    let (first, _) = test.collection().insert_collection(CollectionTier::Gold).await?;
    let (second, _) = test.collection().insert_collection(CollectionTier::Gold).await?;
    test.collection()
        .assign(outlet.id, CollectionTier::Gold, first.id)
        .await?;

    let result = attach_collections(
        State(test.to_app_state::<AppState>()),
        Path(outlet.id),
        Json(AttachCollectionsDto {
            gold_collection_id: Some(second.id),
            silver_collection_id: None,
            crystal_collection_id: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 404 Not Found for an empty tier
#[tokio::test]
async fn get_outlet_collection_returns_not_found_for_empty_tier() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;
    let outlet = test.outlet().insert_outlet(owner.id).await?;

    let result = get_outlet_collection(
        State(test.to_app_state::<AppState>()),
        Path(outlet.id),
        Query(TierQuery {
            tier: CollectionTier::Crystal,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
