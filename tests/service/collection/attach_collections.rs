//! Tests for CollectionService::attach_collections.
//!
//! A tier is filled at most once. Requests naming a filled tier are rejected as a whole.

use entity::prelude::*;
use entity::sea_orm_active_enums::CollectionTier;
use pegman::{
    model::collection::AttachCollectionsDto,
    server::{
        error::{conflict::ConflictError, not_found::NotFoundError, Error},
        service::collection::CollectionService,
    },
};
use pegman_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use uuid::Uuid;

fn request(
    gold: Option<Uuid>,
    silver: Option<Uuid>,
    crystal: Option<Uuid>,
) -> AttachCollectionsDto {
    AttachCollectionsDto {
        gold_collection_id: gold,
        silver_collection_id: silver,
        crystal_collection_id: crystal,
    }
}

/// Expect empty tiers to be filled and returned expanded
#[tokio::test]
async fn attaches_to_empty_tiers() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;
    let outlet = test.outlet().insert_outlet(owner.id).await?;
    let (gold, _) = test.collection().insert_collection(CollectionTier::Gold).await?;
    let (crystal, _) = test
        .collection()
        .insert_collection(CollectionTier::Crystal)
        .await?;

    let collection_service = CollectionService::new(&test.db);
    let dto = collection_service
        .attach_collections(outlet.id, request(Some(gold.id), None, Some(crystal.id)))
        .await
        .unwrap();

    assert_eq!(dto.gold_collection.map(|c| c.id), Some(gold.id));
    assert!(dto.silver_collection.is_none());
    assert_eq!(dto.crystal_collection.map(|c| c.id), Some(crystal.id));

    Ok(())
}

/// Expect a filled tier to reject the request and leave other tiers untouched
#[tokio::test]
async fn fails_when_any_tier_is_filled() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;
    let outlet = test.outlet().insert_outlet(owner.id).await?;
    let (gold, _) = test.collection().insert_collection(CollectionTier::Gold).await?;
    let (other_gold, _) = test.collection().insert_collection(CollectionTier::Gold).await?;
    let (silver, _) = test
        .collection()
        .insert_collection(CollectionTier::Silver)
        .await?;
    test.collection()
        .assign(outlet.id, CollectionTier::Gold, gold.id)
        .await?;

    let collection_service = CollectionService::new(&test.db);
    let result = collection_service
        .attach_collections(outlet.id, request(Some(other_gold.id), Some(silver.id), None))
        .await;

    assert!(matches!(
        result,
        Err(Error::ConflictError(ConflictError::TierAlreadyAssigned(
            CollectionTier::Gold
        )))
    ));
    assert_eq!(OutletCollection::find().count(&test.db).await?, 1);

    Ok(())
}

/// Expect attaching only silver to keep an existing gold assignment
#[tokio::test]
async fn attaches_silver_and_keeps_existing_gold() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;
    let outlet = test.outlet().insert_outlet(owner.id).await?;
    let (gold, _) = test.collection().insert_collection(CollectionTier::Gold).await?;
    let (silver, _) = test
        .collection()
        .insert_collection(CollectionTier::Silver)
        .await?;
    test.collection()
        .assign(outlet.id, CollectionTier::Gold, gold.id)
        .await?;

    let collection_service = CollectionService::new(&test.db);
    let dto = collection_service
        .attach_collections(outlet.id, request(None, Some(silver.id), None))
        .await
        .unwrap();

    assert_eq!(dto.gold_collection.map(|c| c.id), Some(gold.id));
    assert_eq!(dto.silver_collection.map(|c| c.id), Some(silver.id));
    assert!(dto.crystal_collection.is_none());

    let stored_gold = OutletCollection::find_by_id((outlet.id, CollectionTier::Gold))
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored_gold.collection_id, gold.id);
    assert_eq!(OutletCollection::find().count(&test.db).await?, 2);

    Ok(())
}

/// Expect a collection of another tier to be rejected
#[tokio::test]
async fn fails_for_mismatched_tier() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;
    let outlet = test.outlet().insert_outlet(owner.id).await?;
    let (silver, _) = test
        .collection()
        .insert_collection(CollectionTier::Silver)
        .await?;

    let collection_service = CollectionService::new(&test.db);
    let result = collection_service
        .attach_collections(outlet.id, request(Some(silver.id), None, None))
        .await;

    match result {
        Err(Error::ValidationError(err)) => assert_eq!(err.field, "goldCollectionId"),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(OutletCollection::find().count(&test.db).await?, 0);

    Ok(())
}

/// Expect a request naming no tier to be rejected
#[tokio::test]
async fn fails_for_empty_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;
    let outlet = test.outlet().insert_outlet(owner.id).await?;

    let collection_service = CollectionService::new(&test.db);
    let result = collection_service
        .attach_collections(outlet.id, request(None, None, None))
        .await;

    assert!(matches!(result, Err(Error::ValidationError(_))));

    Ok(())
}

/// Expect missing outlet and missing collection to be reported separately
#[tokio::test]
async fn fails_for_unknown_outlet_or_collection() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;
    let outlet = test.outlet().insert_outlet(owner.id).await?;
    let (gold, _) = test.collection().insert_collection(CollectionTier::Gold).await?;
    let missing = Uuid::new_v4();

    let collection_service = CollectionService::new(&test.db);

    let result = collection_service
        .attach_collections(missing, request(Some(gold.id), None, None))
        .await;
    match result {
        Err(Error::NotFoundError(err)) => assert_eq!(err, NotFoundError::Outlet(missing)),
        other => panic!("expected not found, got {other:?}"),
    }

    let result = collection_service
        .attach_collections(outlet.id, request(Some(missing), None, None))
        .await;
    match result {
        Err(Error::NotFoundError(err)) => assert_eq!(err, NotFoundError::Collection(missing)),
        other => panic!("expected not found, got {other:?}"),
    }

    Ok(())
}
