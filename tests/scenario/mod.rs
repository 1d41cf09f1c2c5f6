//! End-to-end onboarding scenarios.
//!
//! Each scenario builds on the state the previous one leaves behind: an outlet is created,
//! verified and un-verified, given a Gold collection, and then refused a second one.

use entity::sea_orm_active_enums::CollectionTier;
use pegman::{
    model::{collection::AttachCollectionsDto, outlet::OutletDto},
    server::{
        error::{conflict::ConflictError, Error},
        model::expansion::OutletExpansion,
        service::{
            collection::CollectionService, outlet::OutletService,
            verification::VerificationService,
        },
    },
};
use pegman_test_utils::prelude::*;

use crate::util::{collection_payload, outlet_payload};

fn gold(collection_id: uuid::Uuid) -> AttachCollectionsDto {
    AttachCollectionsDto {
        gold_collection_id: Some(collection_id),
        silver_collection_id: None,
        crystal_collection_id: None,
    }
}

/// Scenario A
async fn create_bar_a(test: &TestContext) -> Result<OutletDto, TestError> {
    let owner = test.owner().insert_owner("9876543210").await?;

    let outlet = OutletService::new(&test.db)
        .create_outlet(outlet_payload(owner.id))
        .await
        .unwrap();

    Ok(outlet)
}

/// Expect an unverified outlet with every required part linked and no bartender
#[tokio::test]
async fn scenario_a_creates_outlet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;

    let outlet = create_bar_a(&test).await?;

    assert!(!outlet.is_verified);
    assert_eq!(outlet.details.as_ref().map(|d| d.id), Some(outlet.details_id));
    assert_eq!(
        outlet.legal_document.as_ref().map(|d| d.id),
        Some(outlet.legal_document_id)
    );
    assert_eq!(outlet.manager.as_ref().map(|m| m.id), Some(outlet.manager_id));
    assert_eq!(outlet.timing.as_ref().map(|t| t.id), Some(outlet.timing_id));
    assert!(outlet.bartender_id.is_none());

    Ok(())
}

/// Expect reads to follow verification in both directions
#[tokio::test]
async fn scenario_b_verifies_and_unverifies() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let outlet = create_bar_a(&test).await?;

    let verification_service = VerificationService::new(&test.db);
    let outlet_service = OutletService::new(&test.db);

    verification_service
        .set_verified(outlet.id, true)
        .await
        .unwrap();
    let fetched = outlet_service
        .get_outlet(outlet.id, &OutletExpansion::none())
        .await
        .unwrap();
    assert!(fetched.is_verified);

    verification_service
        .set_verified(outlet.id, false)
        .await
        .unwrap();
    let fetched = outlet_service
        .get_outlet(outlet.id, &OutletExpansion::none())
        .await
        .unwrap();
    assert!(!fetched.is_verified);

    Ok(())
}

/// Expect the Gold tier read to return the attached collection and its one liquor
#[tokio::test]
async fn scenario_c_attaches_gold_collection() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let outlet = create_bar_a(&test).await?;

    let collection_service = CollectionService::new(&test.db);
    let collection = collection_service
        .create_collection(collection_payload(CollectionTier::Gold))
        .await
        .unwrap();
    collection_service
        .attach_collections(outlet.id, gold(collection.id))
        .await
        .unwrap();

    let dto = collection_service
        .get_outlet_collection(outlet.id, CollectionTier::Gold)
        .await
        .unwrap();

    assert_eq!(dto.collection.id, collection.id);
    assert_eq!(dto.collection.pegs_per_day, 2);
    assert_eq!(dto.collection.liquors.len(), 1);
    assert_eq!(dto.collection.liquors[0].category, "Whisky");
    assert_eq!(dto.collection.liquors[0].starting_price, 500);
    assert_eq!(dto.collection.liquors[0].brand_names, vec!["X".to_string()]);

    Ok(())
}

/// Expect a second Gold collection to conflict and the first to stay attached
#[tokio::test]
async fn scenario_d_rejects_second_gold_collection() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let outlet = create_bar_a(&test).await?;

    let collection_service = CollectionService::new(&test.db);
    let first = collection_service
        .create_collection(collection_payload(CollectionTier::Gold))
        .await
        .unwrap();
    let second = collection_service
        .create_collection(collection_payload(CollectionTier::Gold))
        .await
        .unwrap();
    collection_service
        .attach_collections(outlet.id, gold(first.id))
        .await
        .unwrap();

    let result = collection_service
        .attach_collections(outlet.id, gold(second.id))
        .await;
    assert!(matches!(
        result,
        Err(Error::ConflictError(ConflictError::TierAlreadyAssigned(
            CollectionTier::Gold
        )))
    ));

    let dto = collection_service
        .get_outlet_collection(outlet.id, CollectionTier::Gold)
        .await
        .unwrap();
    assert_eq!(dto.collection.id, first.id);

    Ok(())
}
