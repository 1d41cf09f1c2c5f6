//! Tests for CollectionService::get_outlet_collection.

use entity::sea_orm_active_enums::CollectionTier;
use pegman::server::{error::Error, service::collection::CollectionService};
use pegman_test_utils::prelude::*;
use uuid::Uuid;

/// Expect the outlet with the collection held for the tier
#[tokio::test]
async fn returns_collection_for_tier() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;
    let outlet = test.outlet().insert_outlet(owner.id).await?;
    let (silver, liquor) = test
        .collection()
        .insert_collection(CollectionTier::Silver)
        .await?;
    test.collection()
        .assign(outlet.id, CollectionTier::Silver, silver.id)
        .await?;

    let collection_service = CollectionService::new(&test.db);
    let dto = collection_service
        .get_outlet_collection(outlet.id, CollectionTier::Silver)
        .await
        .unwrap();

    assert_eq!(dto.outlet.id, outlet.id);
    assert_eq!(dto.collection.id, silver.id);
    assert_eq!(dto.collection.liquors[0].id, liquor.id);

    Ok(())
}

/// Expect distinct messages for a missing outlet and an empty tier
#[tokio::test]
async fn distinguishes_missing_outlet_from_empty_tier() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;
    let outlet = test.outlet().insert_outlet(owner.id).await?;

    let collection_service = CollectionService::new(&test.db);

    let missing_outlet = collection_service
        .get_outlet_collection(Uuid::new_v4(), CollectionTier::Gold)
        .await;
    let empty_tier = collection_service
        .get_outlet_collection(outlet.id, CollectionTier::Gold)
        .await;

    match (missing_outlet, empty_tier) {
        (Err(Error::NotFoundError(outlet_err)), Err(Error::NotFoundError(tier_err))) => {
            assert_eq!(outlet_err.to_string(), "Outlet not found");
            assert_eq!(tier_err.to_string(), "Gold collection not found");
        }
        other => panic!("expected two not found errors, got {other:?}"),
    }

    Ok(())
}
