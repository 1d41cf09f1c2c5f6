//! SeaORM entity models for the Pegman database.
//!
//! One module per table. List-valued columns are stored as JSON and decoded into the
//! wrappers in [`json`]; enumerated columns are string-backed active enums declared in
//! [`sea_orm_active_enums`].

pub mod prelude;

pub mod app_user;
pub mod collection;
pub mod infinity_pass;
pub mod json;
pub mod liquor;
pub mod outlet;
pub mod outlet_bartender;
pub mod outlet_collection;
pub mod outlet_details;
pub mod outlet_legal_document;
pub mod outlet_manager;
pub mod outlet_timing;
pub mod outlet_timing_slot;
pub mod owner;
pub mod sea_orm_active_enums;
pub mod ticket;
pub mod ticket_item;
