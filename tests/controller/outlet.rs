//! Tests for the outlet endpoints.
//!
//! Verifies status codes for creation, reads, verification and the standalone part
//! endpoints, and that service errors map to their HTTP status.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use pegman::{
    model::outlet::{OutletExpandQuery, VerifyOutletDto},
    server::{
        controller::outlet::{
            create_legal_document, create_outlet, get_outlet, verify_outlet,
        },
        model::app::AppState,
    },
};
use pegman_test_utils::prelude::*;
use uuid::Uuid;

use crate::util::{legal_document_payload, outlet_payload};

/// Expect 201 Created for a complete outlet payload
#[tokio::test]
async fn create_outlet_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;

    let result = create_outlet(
        State(test.to_app_state::<AppState>()),
        Json(outlet_payload(owner.id)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 400 Bad Request for an invalid sub-payload
#[tokio::test]
async fn create_outlet_rejects_invalid_payload() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;

    let mut payload = outlet_payload(owner.id);
    payload.details.pincode = "56".to_string();

    let result = create_outlet(State(test.to_app_state::<AppState>()), Json(payload)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 Not Found for an unknown outlet
#[tokio::test]
async fn get_outlet_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;

    let result = get_outlet(
        State(test.to_app_state::<AppState>()),
        Path(Uuid::new_v4()),
        Query(OutletExpandQuery::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 OK when verifying an existing outlet
#[tokio::test]
async fn verify_outlet_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().with_outlet_tables().build().await?;
    let owner = test.owner().insert_owner("9876543210").await?;
    let outlet = test.outlet().insert_outlet(owner.id).await?;

    let result = verify_outlet(
        State(test.to_app_state::<AppState>()),
        Path(outlet.id),
        Json(VerifyOutletDto { is_verified: true }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 500 Internal Server Error when the storage layer fails
#[tokio::test]
async fn create_legal_document_returns_internal_error_without_table() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = create_legal_document(
        State(test.to_app_state::<AppState>()),
        Json(legal_document_payload()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
