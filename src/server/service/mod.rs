//! Service layer for business logic and orchestration.
//!
//! Services validate client input, check the state they depend on and scope every
//! multi-row write in a single transaction. Repositories do the storage calls. Services
//! that assemble outlets share [`outlet::load_outlet_dto`] to build expanded responses.

pub mod collection;
pub mod infinity_pass;
pub mod outlet;
pub mod owner;
pub mod timing;
pub mod verification;
