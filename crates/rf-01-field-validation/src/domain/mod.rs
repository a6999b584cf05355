//! Domain module for Field Validation
//!
//! Contains rule predicates and form schemas.

pub mod rules;
pub mod schema;

pub use schema::*;
