//! Ports module for the Notifier

pub mod inbound;

pub use inbound::Notifier;
