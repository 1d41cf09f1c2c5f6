//! Pegman outlet onboarding backend.
//!
//! `model` holds the request and response DTOs shared by the HTTP layer and the services,
//! `server` holds configuration, persistence, business rules and the axum router.

pub mod model;
pub mod server;
