//! Tests for InfinityPassService::create.
//!
//! An outlet holds at most one pass. A second attempt is a conflict and leaves no orphan
//! pass row behind.

use entity::prelude::*;
use entity::sea_orm_active_enums::DayOfWeek;
use pegman::server::{
    error::{conflict::ConflictError, Error},
    service::infinity_pass::{InfinityPassService, DEFAULT_COMMISSION},
};
use pegman_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use uuid::Uuid;

use crate::util::infinity_pass_payload;

/// Expect the pass to be created with the default commission and linked to the outlet
#[tokio::test]
async fn creates_and_links_pass() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;
    let outlet = test.outlet().insert_outlet(owner.id).await?;

    let infinity_pass_service = InfinityPassService::new(&test.db);
    let dto = infinity_pass_service
        .create(outlet.id, infinity_pass_payload())
        .await
        .unwrap();

    assert_eq!(dto.outlet.infinity_pass_id, Some(dto.infinity_pass.id));
    assert_eq!(dto.infinity_pass.commission, DEFAULT_COMMISSION);
    assert_eq!(
        dto.infinity_pass.days,
        vec![DayOfWeek::Friday, DayOfWeek::Saturday]
    );
    assert_eq!(dto.infinity_pass.start_time, "18:00");

    Ok(())
}

/// Expect a second pass to conflict without storing another pass row
#[tokio::test]
async fn fails_when_outlet_has_pass() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;
    let outlet = test.outlet().insert_outlet(owner.id).await?;

    let infinity_pass_service = InfinityPassService::new(&test.db);
    infinity_pass_service
        .create(outlet.id, infinity_pass_payload())
        .await
        .unwrap();
    let result = infinity_pass_service
        .create(outlet.id, infinity_pass_payload())
        .await;

    assert!(matches!(
        result,
        Err(Error::ConflictError(ConflictError::InfinityPassAlreadyAttached))
    ));
    assert_eq!(InfinityPass::find().count(&test.db).await?, 1);

    Ok(())
}

/// Expect a repeated day to be rejected
#[tokio::test]
async fn fails_for_duplicate_days() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;
    let outlet = test.outlet().insert_outlet(owner.id).await?;

    let mut payload = infinity_pass_payload();
    payload.days = vec![DayOfWeek::Friday, DayOfWeek::Friday];

    let infinity_pass_service = InfinityPassService::new(&test.db);
    let result = infinity_pass_service.create(outlet.id, payload).await;

    match result {
        Err(Error::ValidationError(err)) => {
            assert_eq!(err.message, "Each day can only be listed once")
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(InfinityPass::find().count(&test.db).await?, 0);

    Ok(())
}

/// Expect NotFound for an unknown outlet and no pass stored
#[tokio::test]
async fn fails_for_unknown_outlet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;

    let infinity_pass_service = InfinityPassService::new(&test.db);
    let result = infinity_pass_service
        .create(Uuid::new_v4(), infinity_pass_payload())
        .await;

    assert!(matches!(result, Err(Error::NotFoundError(_))));
    assert_eq!(InfinityPass::find().count(&test.db).await?, 0);

    Ok(())
}
