//! Tests for InfinityPassService::get.

use pegman::server::{error::Error, service::infinity_pass::InfinityPassService};
use pegman_test_utils::prelude::*;
use uuid::Uuid;

use crate::util::infinity_pass_payload;

/// Expect the outlet together with its pass
#[tokio::test]
async fn returns_outlet_with_pass() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;
    let outlet = test.outlet().insert_outlet(owner.id).await?;

    let infinity_pass_service = InfinityPassService::new(&test.db);
    let created = infinity_pass_service
        .create(outlet.id, infinity_pass_payload())
        .await
        .unwrap();
    let fetched = infinity_pass_service.get(outlet.id).await.unwrap();

    assert_eq!(fetched.outlet.id, outlet.id);
    assert_eq!(fetched.infinity_pass.id, created.infinity_pass.id);
    assert_eq!(fetched.infinity_pass.cuisine.as_deref(), Some("North Indian"));

    Ok(())
}

/// Expect distinct messages for a missing outlet and an outlet without a pass
#[tokio::test]
async fn distinguishes_missing_outlet_from_missing_pass() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;
    let outlet = test.outlet().insert_outlet(owner.id).await?;

    let infinity_pass_service = InfinityPassService::new(&test.db);

    match infinity_pass_service.get(Uuid::new_v4()).await {
        Err(Error::NotFoundError(err)) => assert_eq!(err.to_string(), "Outlet not found"),
        other => panic!("expected not found, got {other:?}"),
    }
    match infinity_pass_service.get(outlet.id).await {
        Err(Error::NotFoundError(err)) => {
            assert_eq!(err.to_string(), "Outlet does not have an infinity pass")
        }
        other => panic!("expected not found, got {other:?}"),
    }

    Ok(())
}
