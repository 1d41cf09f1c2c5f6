//! Tests for OutletService::link_outlet.
//!
//! Verifies creating an outlet from parts stored earlier, with each missing reference
//! reported by name.

use entity::prelude::*;
use pegman::{
    model::outlet::LinkOutletDto,
    server::{
        error::{conflict::ConflictError, not_found::NotFoundError, Error},
        service::outlet::OutletService,
    },
};
use pegman_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use uuid::Uuid;

async fn parts(test: &TestContext, owner_id: Uuid) -> Result<LinkOutletDto, TestError> {
    let details = test.outlet().insert_details().await?;
    let legal_document = test.outlet().insert_legal_document().await?;
    let manager = test.outlet().insert_manager().await?;
    let (timing, _) = test.outlet().insert_timing(&[]).await?;

    Ok(LinkOutletDto {
        owner_id,
        name: Some("Linked Bar".to_string()),
        details_id: details.id,
        legal_document_id: legal_document.id,
        manager_id: manager.id,
        timing_id: timing.id,
        bartender_id: None,
    })
}

/// Expect an outlet pointing at the existing parts
#[tokio::test]
async fn links_existing_parts() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;
    let bartender = test.outlet().insert_bartender().await?;
    let mut payload = parts(&test, owner.id).await?;
    payload.bartender_id = Some(bartender.id);

    let outlet_service = OutletService::new(&test.db);
    let outlet = outlet_service.link_outlet(payload.clone()).await.unwrap();

    assert!(!outlet.is_verified);
    assert_eq!(outlet.details_id, payload.details_id);
    assert_eq!(outlet.timing_id, payload.timing_id);
    assert_eq!(outlet.bartender_id, Some(bartender.id));

    Ok(())
}

/// Expect each missing reference to be named in the NotFound error
#[tokio::test]
async fn fails_naming_missing_reference() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;
    let payload = parts(&test, owner.id).await?;
    let outlet_service = OutletService::new(&test.db);

    let missing = Uuid::new_v4();

    let mut no_bartender = payload.clone();
    no_bartender.bartender_id = Some(missing);
    let mut no_details = payload.clone();
    no_details.details_id = missing;
    let mut no_timing = payload.clone();
    no_timing.timing_id = missing;
    let mut no_owner = payload.clone();
    no_owner.owner_id = missing;

    let cases = [
        (no_bartender, NotFoundError::Bartender(missing)),
        (no_details, NotFoundError::OutletDetails(missing)),
        (no_timing, NotFoundError::Timing(missing)),
        (no_owner, NotFoundError::Owner(missing)),
    ];

    for (payload, expected) in cases {
        match outlet_service.link_outlet(payload).await {
            Err(Error::NotFoundError(err)) => assert_eq!(err, expected),
            other => panic!("expected {expected:?}, got {other:?}"),
        }
    }
    assert_eq!(Outlet::find().count(&test.db).await?, 0);

    Ok(())
}

/// Expect a conflict when the details already belong to another outlet
#[tokio::test]
async fn fails_for_part_already_linked() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;
    let existing = test.outlet().insert_outlet(owner.id).await?;
    let mut payload = parts(&test, owner.id).await?;
    payload.details_id = existing.details_id;

    let outlet_service = OutletService::new(&test.db);
    let result = outlet_service.link_outlet(payload).await;

    assert!(matches!(
        result,
        Err(Error::ConflictError(ConflictError::PartAlreadyLinked))
    ));

    Ok(())
}
