//! Shared helpers for input validation and clock-time handling.

pub mod time;
pub mod validation;
