//! Server-side models: application state, database model aliases, relation expansion
//! flags and validated inputs passed from services to repositories.

pub mod app;
pub mod db;
pub mod expansion;
pub mod input;
