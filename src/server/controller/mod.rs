//! HTTP controller endpoints for the Pegman web API.
//!
//! Axum handlers that extract the request, call one service method and map the result to a
//! status code. Errors are returned as [`crate::server::error::Error`], which renders the
//! shared `ErrorDto` body. Every handler carries a utoipa path for the OpenAPI document.

pub mod collection;
pub mod health;
pub mod infinity_pass;
pub mod outlet;
pub mod owner;
pub mod timing;
