//! Tests for OutletService::create_outlet.
//!
//! Verifies the composite creation path: every part is written with the outlet in one
//! transaction, and any failure leaves none of the six participating tables touched.

use entity::prelude::*;
use entity::sea_orm_active_enums::DayOfWeek;
use pegman::server::{error::Error, service::outlet::OutletService};
use pegman_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use uuid::Uuid;

use crate::util::{bartender_payload, outlet_payload, slot_payload};

async fn count_parts(test: &TestContext) -> Result<[u64; 6], TestError> {
    Ok([
        OutletDetails::find().count(&test.db).await?,
        OutletLegalDocument::find().count(&test.db).await?,
        OutletManager::find().count(&test.db).await?,
        OutletTiming::find().count(&test.db).await?,
        OutletTimingSlot::find().count(&test.db).await?,
        OutletBartender::find().count(&test.db).await?,
    ])
}

/// Expect an unverified outlet with all parts linked
#[tokio::test]
async fn creates_outlet_with_parts() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;

    let outlet_service = OutletService::new(&test.db);
    let outlet = outlet_service
        .create_outlet(outlet_payload(owner.id))
        .await
        .unwrap();

    assert!(!outlet.is_verified);
    assert_eq!(outlet.owner_id, owner.id);
    assert_eq!(outlet.name.as_deref(), Some("Bar A"));
    assert!(outlet.bartender_id.is_none());
    assert_eq!(outlet.details.as_ref().map(|d| d.id), Some(outlet.details_id));
    assert_eq!(outlet.timing.as_ref().map(|t| t.slots.len()), Some(1));
    assert_eq!(Outlet::find().count(&test.db).await?, 1);

    Ok(())
}

/// Expect the optional bartender to be created and linked
#[tokio::test]
async fn creates_outlet_with_bartender() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;

    let mut payload = outlet_payload(owner.id);
    payload.bartender = Some(bartender_payload());

    let outlet_service = OutletService::new(&test.db);
    let outlet = outlet_service.create_outlet(payload).await.unwrap();

    assert!(outlet.bartender_id.is_some());
    assert_eq!(outlet.bartender.map(|b| b.name), Some("Ravi".to_string()));

    Ok(())
}

/// Expect a ValidationError and no rows when a sub-payload field is invalid
#[tokio::test]
async fn fails_for_invalid_manager_phone() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;

    let mut payload = outlet_payload(owner.id);
    payload.manager.contact_number = "12345".to_string();

    let outlet_service = OutletService::new(&test.db);
    let result = outlet_service.create_outlet(payload).await;

    match result {
        Err(Error::ValidationError(err)) => assert_eq!(err.field, "manager.contactNumber"),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(count_parts(&test).await?, [0; 6]);
    assert_eq!(Outlet::find().count(&test.db).await?, 0);

    Ok(())
}

/// Expect the duplicate-day message and no timing rows for a schedule with a repeated day
#[tokio::test]
async fn fails_for_duplicate_slot_day() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;

    let mut payload = outlet_payload(owner.id);
    payload.timing.slots = vec![
        slot_payload(DayOfWeek::Monday, "09:00", "12:00"),
        slot_payload(DayOfWeek::Monday, "18:00", "23:00"),
    ];

    let outlet_service = OutletService::new(&test.db);
    let result = outlet_service.create_outlet(payload).await;

    match result {
        Err(Error::ValidationError(err)) => {
            assert_eq!(err.message, "Each day can only have one time slot")
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(count_parts(&test).await?, [0; 6]);

    Ok(())
}

/// Expect NotFound for an unknown owner and nothing written
#[tokio::test]
async fn fails_for_unknown_owner() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;

    let outlet_service = OutletService::new(&test.db);
    let result = outlet_service.create_outlet(outlet_payload(Uuid::new_v4())).await;

    assert!(matches!(result, Err(Error::NotFoundError(_))));
    assert_eq!(count_parts(&test).await?, [0; 6]);

    Ok(())
}

/// Expect every part to be rolled back when the outlet insert itself fails
///
/// The outlet table is left out of the schema so the final insert errors after the
/// details, legal document, manager, timing and slots were written in the transaction.
#[tokio::test]
async fn rolls_back_parts_when_outlet_insert_fails() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(Owner)
        .with_table(OutletDetails)
        .with_table(OutletLegalDocument)
        .with_table(OutletManager)
        .with_table(OutletBartender)
        .with_table(OutletTiming)
        .with_table(OutletTimingSlot)
        .build()
        .await?;
    let owner = test.owner().insert_owner("9876543210").await?;

    let mut payload = outlet_payload(owner.id);
    payload.bartender = Some(bartender_payload());

    let outlet_service = OutletService::new(&test.db);
    let result = outlet_service.create_outlet(payload).await;

    assert!(matches!(result, Err(Error::DbErr(_))));
    assert_eq!(count_parts(&test).await?, [0; 6]);

    Ok(())
}
