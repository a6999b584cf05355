//! Ports module for Field Validation
//!
//! Only an inbound port: validation has no outbound dependencies.

pub mod inbound;

pub use inbound::FieldValidationApi;
