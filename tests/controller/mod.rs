//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors to check status codes, and the full
//! router is driven with `tower::ServiceExt::oneshot` to check routing, JSON bodies and the
//! error envelope.

mod collection;
mod outlet;

use axum::{body::Body, http::StatusCode, response::Response};
use pegman_test_utils::prelude::*;

/// Read a response into its status and JSON body
pub async fn json_body(response: Response) -> Result<(StatusCode, serde_json::Value), TestError> {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    Ok((status, serde_json::from_slice(&bytes)?))
}

/// Build a JSON request for the router
pub fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
