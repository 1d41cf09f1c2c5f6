//! Tests for VerificationService::set_verified.

use pegman::server::{error::Error, service::verification::VerificationService};
use pegman_test_utils::prelude::*;
use uuid::Uuid;

/// Expect the flag to follow the requested value in both directions
#[tokio::test]
async fn toggles_verification() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;
    let outlet = test.outlet().insert_outlet(owner.id).await?;

    let verification_service = VerificationService::new(&test.db);

    let verified = verification_service
        .set_verified(outlet.id, true)
        .await
        .unwrap();
    assert!(verified.is_verified);

    let again = verification_service
        .set_verified(outlet.id, true)
        .await
        .unwrap();
    assert!(again.is_verified);

    let unverified = verification_service
        .set_verified(outlet.id, false)
        .await
        .unwrap();
    assert!(!unverified.is_verified);

    Ok(())
}

/// Expect NotFound for an unknown outlet
#[tokio::test]
async fn fails_for_unknown_outlet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;

    let verification_service = VerificationService::new(&test.db);
    let result = verification_service.set_verified(Uuid::new_v4(), true).await;

    assert!(matches!(result, Err(Error::NotFoundError(_))));

    Ok(())
}
