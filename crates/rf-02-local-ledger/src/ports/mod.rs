//! Ports module for the Local Ledger
//!
//! Defines inbound (outcome recording) and outbound (key-value store) traits.

pub mod inbound;
pub mod outbound;

pub use inbound::OutcomeSink;
pub use outbound::Persistence;
