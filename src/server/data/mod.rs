//! Data access layer repositories.
//!
//! One repository per table. Every repository is generic over `ConnectionTrait` so the same
//! code runs against a pooled connection or inside a `DatabaseTransaction`, which is how
//! services get all-or-nothing writes across several tables.

pub mod bartender;
pub mod collection;
pub mod infinity_pass;
pub mod legal_document;
pub mod liquor;
pub mod manager;
pub mod outlet;
pub mod outlet_collection;
pub mod outlet_details;
pub mod owner;
pub mod timing;
pub mod timing_slot;
