//! Tests for TimingService::add_slot.

use entity::sea_orm_active_enums::DayOfWeek;
use pegman::{
    model::timing::AddTimingSlotDto,
    server::{
        error::{conflict::ConflictError, not_found::NotFoundError, Error},
        service::timing::TimingService,
    },
};
use pegman_test_utils::prelude::*;
use uuid::Uuid;

fn slot(day: DayOfWeek, opening_time: &str, closing_time: &str) -> AddTimingSlotDto {
    AddTimingSlotDto {
        day,
        opening_time: opening_time.to_string(),
        closing_time: closing_time.to_string(),
    }
}

/// Expect a slot for a free day to be added
#[tokio::test]
async fn adds_slot_for_free_day() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let (timing, _) = test
        .outlet()
        .insert_timing(&[(DayOfWeek::Monday, factory::time(18, 0), factory::time(23, 0))])
        .await?;

    let timing_service = TimingService::new(&test.db);
    let added = timing_service
        .add_slot(timing.id, slot(DayOfWeek::Tuesday, "17:00", "22:00"))
        .await
        .unwrap();

    assert_eq!(added.outlet_timing_id, timing.id);
    assert_eq!(added.day, DayOfWeek::Tuesday);
    assert_eq!(added.opening_time, "17:00");

    Ok(())
}

/// Expect a conflict when the day already has a slot
#[tokio::test]
async fn fails_for_taken_day() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let (timing, _) = test
        .outlet()
        .insert_timing(&[(DayOfWeek::Monday, factory::time(18, 0), factory::time(23, 0))])
        .await?;

    let timing_service = TimingService::new(&test.db);
    let result = timing_service
        .add_slot(timing.id, slot(DayOfWeek::Monday, "09:00", "12:00"))
        .await;

    assert!(matches!(
        result,
        Err(Error::ConflictError(ConflictError::SlotDayTaken(DayOfWeek::Monday)))
    ));

    Ok(())
}

/// Expect NotFound for an unknown timing
#[tokio::test]
async fn fails_for_unknown_timing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let timing_id = Uuid::new_v4();

    let timing_service = TimingService::new(&test.db);
    let result = timing_service
        .add_slot(timing_id, slot(DayOfWeek::Monday, "09:00", "12:00"))
        .await;

    match result {
        Err(Error::NotFoundError(err)) => assert_eq!(err, NotFoundError::Timing(timing_id)),
        other => panic!("expected not found, got {other:?}"),
    }

    Ok(())
}

/// Expect a closing time before the opening time to be rejected
#[tokio::test]
async fn fails_for_inverted_times() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let (timing, _) = test.outlet().insert_timing(&[]).await?;

    let timing_service = TimingService::new(&test.db);
    let result = timing_service
        .add_slot(timing.id, slot(DayOfWeek::Sunday, "23:00", "01:00"))
        .await;

    match result {
        Err(Error::ValidationError(err)) => {
            assert_eq!(err.field, "closingTime");
            assert_eq!(err.message, "Opening time must be before closing time for Sunday");
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    Ok(())
}
