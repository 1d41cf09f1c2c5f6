//! Tests for TimingService::update_slot.
//!
//! Partial updates are checked against the slot as it will be stored, not only the fields
//! that were sent.

use entity::sea_orm_active_enums::DayOfWeek;
use pegman::{
    model::timing::UpdateTimingSlotDto,
    server::{
        error::{conflict::ConflictError, Error},
        service::timing::TimingService,
    },
};
use pegman_test_utils::prelude::*;
use uuid::Uuid;

fn update(
    day: Option<DayOfWeek>,
    opening_time: Option<&str>,
    closing_time: Option<&str>,
) -> UpdateTimingSlotDto {
    UpdateTimingSlotDto {
        day,
        opening_time: opening_time.map(str::to_string),
        closing_time: closing_time.map(str::to_string),
    }
}

/// Expect only the provided fields to change
#[tokio::test]
async fn updates_closing_time() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let (_, slots) = test
        .outlet()
        .insert_timing(&[(DayOfWeek::Monday, factory::time(18, 0), factory::time(23, 0))])
        .await?;

    let timing_service = TimingService::new(&test.db);
    let updated = timing_service
        .update_slot(slots[0].id, update(None, None, Some("23:45")))
        .await
        .unwrap();

    assert_eq!(updated.day, DayOfWeek::Monday);
    assert_eq!(updated.opening_time, "18:00");
    assert_eq!(updated.closing_time, "23:45");

    Ok(())
}

/// Expect an opening time past the stored closing time to be rejected
#[tokio::test]
async fn fails_when_opening_passes_stored_closing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let (_, slots) = test
        .outlet()
        .insert_timing(&[(DayOfWeek::Monday, factory::time(18, 0), factory::time(23, 0))])
        .await?;

    let timing_service = TimingService::new(&test.db);
    let result = timing_service
        .update_slot(slots[0].id, update(None, Some("23:30"), None))
        .await;

    assert!(matches!(result, Err(Error::ValidationError(_))));

    Ok(())
}

/// Expect moving onto a day another slot covers to conflict
#[tokio::test]
async fn fails_when_moving_to_taken_day() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let (_, slots) = test
        .outlet()
        .insert_timing(&[
            (DayOfWeek::Monday, factory::time(18, 0), factory::time(23, 0)),
            (DayOfWeek::Tuesday, factory::time(18, 0), factory::time(23, 0)),
        ])
        .await?;

    let timing_service = TimingService::new(&test.db);
    let result = timing_service
        .update_slot(slots[0].id, update(Some(DayOfWeek::Tuesday), None, None))
        .await;

    assert!(matches!(
        result,
        Err(Error::ConflictError(ConflictError::SlotDayTaken(DayOfWeek::Tuesday)))
    ));

    Ok(())
}

/// Expect NotFound for an unknown slot
#[tokio::test]
async fn fails_for_unknown_slot() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;

    let timing_service = TimingService::new(&test.db);
    let result = timing_service
        .update_slot(Uuid::new_v4(), update(None, None, Some("23:00")))
        .await;

    assert!(matches!(result, Err(Error::NotFoundError(_))));

    Ok(())
}
