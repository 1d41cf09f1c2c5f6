//! Test fixture modules for database record creation.
//!
//! - `owner` - outlet owner records
//! - `outlet` - outlet aggregates and their sub-entities
//! - `collection` - tiered collections, liquors and tier assignments
//! - `factory` - in-memory models that never touch the database

pub mod collection;
pub mod factory;
pub mod outlet;
pub mod owner;
