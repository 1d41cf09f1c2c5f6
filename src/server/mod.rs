//! Server application core modules.
//!
//! This module contains all server-side functionality for Pegman: configuration, HTTP
//! routing, persistence through sea-orm repositories, and the services that assemble
//! outlets, validate schedules, assign tiered collections, attach infinity passes and
//! verify outlets.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
