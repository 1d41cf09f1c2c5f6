//! Tests for OutletService::create_staff and OutletService::create_legal_document.

use entity::prelude::*;
use pegman::{
    model::outlet::CreateOutletStaffDto,
    server::{error::Error, service::outlet::OutletService},
};
use pegman_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::util::{bartender_payload, details_payload, legal_document_payload, manager_payload};

/// Expect details, manager and bartender to be created together
#[tokio::test]
async fn creates_staff() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;

    let outlet_service = OutletService::new(&test.db);
    let staff = outlet_service
        .create_staff(CreateOutletStaffDto {
            details: details_payload(),
            manager: manager_payload(),
            bartender: Some(bartender_payload()),
        })
        .await
        .unwrap();

    assert_eq!(staff.details.pincode, "560001");
    assert_eq!(staff.manager.email.as_deref(), Some("jane@x.com"));
    assert!(staff.bartender.is_some());

    Ok(())
}

/// Expect nothing stored when the bartender is invalid
#[tokio::test]
async fn fails_for_invalid_bartender() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;

    let mut bartender = bartender_payload();
    bartender.name = String::new();

    let outlet_service = OutletService::new(&test.db);
    let result = outlet_service
        .create_staff(CreateOutletStaffDto {
            details: details_payload(),
            manager: manager_payload(),
            bartender: Some(bartender),
        })
        .await;

    assert!(matches!(result, Err(Error::ValidationError(_))));
    assert_eq!(OutletDetails::find().count(&test.db).await?, 0);
    assert_eq!(OutletManager::find().count(&test.db).await?, 0);

    Ok(())
}

/// Expect a standalone legal document to be stored
#[tokio::test]
async fn creates_legal_document() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;

    let outlet_service = OutletService::new(&test.db);
    let document = outlet_service
        .create_legal_document(legal_document_payload())
        .await
        .unwrap();

    assert_eq!(document.gst_number, "29ABCDE1234F1Z5");
    assert_eq!(OutletLegalDocument::find().count(&test.db).await?, 1);

    Ok(())
}

/// Expect a malformed FSSAI number to be rejected with its field name
#[tokio::test]
async fn fails_for_invalid_fssai_number() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;

    let mut document = legal_document_payload();
    document.fssai_number = "1234".to_string();

    let outlet_service = OutletService::new(&test.db);
    let result = outlet_service.create_legal_document(document).await;

    match result {
        Err(Error::ValidationError(err)) => assert_eq!(err.field, "fssaiNumber"),
        other => panic!("expected validation error, got {other:?}"),
    }

    Ok(())
}
