//! Tests for OwnerService::update_profile.

use pegman::{
    model::owner::UpdateOwnerDto,
    server::{error::Error, service::owner::OwnerService},
};
use pegman_test_utils::prelude::*;
use uuid::Uuid;

/// Expect provided fields to change and omitted fields to be kept
#[tokio::test]
async fn updates_provided_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;

    let owner_service = OwnerService::new(&test.db);
    let updated = owner_service
        .update_profile(
            owner.id,
            UpdateOwnerDto {
                name: None,
                email: Some("owner@example.com".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name.as_deref(), Some("Test Owner"));
    assert_eq!(updated.email.as_deref(), Some("owner@example.com"));

    Ok(())
}

/// Expect an invalid email to be rejected
#[tokio::test]
async fn fails_for_invalid_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;

    let owner_service = OwnerService::new(&test.db);
    let result = owner_service
        .update_profile(
            owner.id,
            UpdateOwnerDto {
                name: None,
                email: Some("not-an-email".to_string()),
            },
        )
        .await;

    assert!(matches!(result, Err(Error::ValidationError(_))));

    Ok(())
}

/// Expect NotFound for an unknown owner
#[tokio::test]
async fn fails_for_unknown_owner() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;

    let owner_service = OwnerService::new(&test.db);
    let result = owner_service
        .update_profile(
            Uuid::new_v4(),
            UpdateOwnerDto {
                name: Some("Someone".to_string()),
                email: None,
            },
        )
        .await;

    assert!(matches!(result, Err(Error::NotFoundError(_))));

    Ok(())
}
