//! Tests for OutletService::get_outlet.
//!
//! Verifies that only the requested relations are loaded, and that timing always comes
//! with its slots.

use entity::sea_orm_active_enums::CollectionTier;
use pegman::server::{
    error::Error,
    model::expansion::{OutletExpansion, OutletRelation},
    service::outlet::OutletService,
};
use pegman_test_utils::prelude::*;
use uuid::Uuid;

/// Every relation, for tests that load an outlet fully expanded
fn all_relations() -> OutletExpansion {
    [
        OutletRelation::Owner,
        OutletRelation::Details,
        OutletRelation::LegalDocument,
        OutletRelation::Manager,
        OutletRelation::Bartender,
        OutletRelation::Timing,
        OutletRelation::Collections,
        OutletRelation::InfinityPass,
    ]
    .into_iter()
    .collect()
}

/// Expect no relations without expansion flags
#[tokio::test]
async fn returns_bare_outlet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;
    let outlet = test.outlet().insert_outlet(owner.id).await?;

    let outlet_service = OutletService::new(&test.db);
    let dto = outlet_service
        .get_outlet(outlet.id, &OutletExpansion::none())
        .await
        .unwrap();

    assert_eq!(dto.id, outlet.id);
    assert!(dto.owner.is_none());
    assert!(dto.details.is_none());
    assert!(dto.timing.is_none());

    Ok(())
}

/// Expect the selected relations, with timing including its slots
#[tokio::test]
async fn expands_selected_relations() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;
    let outlet = test.outlet().insert_outlet(owner.id).await?;

    let expansion = OutletExpansion::none()
        .with(OutletRelation::Owner)
        .with(OutletRelation::Timing);

    let outlet_service = OutletService::new(&test.db);
    let dto = outlet_service.get_outlet(outlet.id, &expansion).await.unwrap();

    assert_eq!(dto.owner.map(|o| o.id), Some(owner.id));
    assert_eq!(dto.timing.map(|t| t.slots.len()), Some(1));
    assert!(dto.manager.is_none());

    Ok(())
}

/// Expect every relation, with only the filled tier populated
#[tokio::test]
async fn expands_all_relations() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;
    let outlet = test.outlet().insert_outlet(owner.id).await?;
    let (collection, _) = test
        .collection()
        .insert_collection(CollectionTier::Silver)
        .await?;
    test.collection()
        .assign(outlet.id, CollectionTier::Silver, collection.id)
        .await?;

    let outlet_service = OutletService::new(&test.db);
    let dto = outlet_service
        .get_outlet(outlet.id, &all_relations())
        .await
        .unwrap();

    assert!(dto.details.is_some());
    assert!(dto.legal_document.is_some());
    assert!(dto.manager.is_some());
    assert!(dto.bartender.is_none());
    assert!(dto.infinity_pass.is_none());
    assert!(dto.gold_collection.is_none());
    assert_eq!(
        dto.silver_collection.map(|c| c.liquors.len()),
        Some(1)
    );

    Ok(())
}

/// Expect NotFound for an unknown outlet
#[tokio::test]
async fn fails_for_unknown_outlet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;

    let outlet_service = OutletService::new(&test.db);
    let result = outlet_service
        .get_outlet(Uuid::new_v4(), &all_relations())
        .await;

    assert!(matches!(result, Err(Error::NotFoundError(_))));

    Ok(())
}
