//! Tests for TimingService::create_timing.

use entity::prelude::*;
use entity::sea_orm_active_enums::DayOfWeek;
use pegman::server::{error::Error, service::timing::TimingService};
use pegman_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::util::{slot_payload, timing_payload};

/// Expect a schedule with its slots ordered Monday to Sunday
#[tokio::test]
async fn creates_timing_with_slots() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;

    let timing_service = TimingService::new(&test.db);
    let timing = timing_service
        .create_timing(timing_payload(vec![
            slot_payload(DayOfWeek::Friday, "18:00", "23:30"),
            slot_payload(DayOfWeek::Monday, "9:00", "17:00"),
        ]))
        .await
        .unwrap();

    assert_eq!(timing.slots.len(), 2);
    assert_eq!(timing.slots[0].day, DayOfWeek::Monday);
    assert_eq!(timing.slots[0].opening_time, "09:00");
    assert_eq!(timing.slots[1].closing_time, "23:30");
    assert!(timing.slots.iter().all(|s| s.outlet_timing_id == timing.id));

    Ok(())
}

/// Expect a repeated day to be rejected before anything is written
#[tokio::test]
async fn fails_for_duplicate_day() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;

    let timing_service = TimingService::new(&test.db);
    let result = timing_service
        .create_timing(timing_payload(vec![
            slot_payload(DayOfWeek::Monday, "09:00", "12:00"),
            slot_payload(DayOfWeek::Monday, "18:00", "23:00"),
        ]))
        .await;

    match result {
        Err(Error::ValidationError(err)) => {
            assert_eq!(err.message, "Each day can only have one time slot")
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(OutletTiming::find().count(&test.db).await?, 0);
    assert_eq!(OutletTimingSlot::find().count(&test.db).await?, 0);

    Ok(())
}

/// Expect an empty slot list to be rejected
#[tokio::test]
async fn fails_without_slots() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;

    let timing_service = TimingService::new(&test.db);
    let result = timing_service.create_timing(timing_payload(Vec::new())).await;

    match result {
        Err(Error::ValidationError(err)) => {
            assert_eq!(err.message, "At least one time slot is required")
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    Ok(())
}

/// Expect the timing row to be rolled back when the slot table is missing
#[tokio::test]
async fn rolls_back_timing_when_slot_insert_fails() -> Result<(), TestError> {
    let test = TestBuilder::new().with_table(OutletTiming).build().await?;

    let timing_service = TimingService::new(&test.db);
    let result = timing_service
        .create_timing(timing_payload(vec![slot_payload(
            DayOfWeek::Monday,
            "09:00",
            "17:00",
        )]))
        .await;

    assert!(matches!(result, Err(Error::DbErr(_))));
    assert_eq!(OutletTiming::find().count(&test.db).await?, 0);

    Ok(())
}
