//! Service layer integration tests against in-memory SQLite.

mod collection;
mod infinity_pass;
mod outlet;
mod owner;
mod timing;
mod verification;
