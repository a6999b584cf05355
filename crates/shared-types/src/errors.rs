//! # Error Types
//!
//! Errors shared across subsystems.

use thiserror::Error;

/// Errors raised while parsing shared domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Payment method identifier is not one of the supported methods.
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    /// Form kind identifier is not recognised.
    #[error("Unknown form kind: {0}")]
    UnknownFormKind(String),
}
