pub mod api;
pub mod collection;
pub mod infinity_pass;
pub mod outlet;
pub mod owner;
pub mod timing;
