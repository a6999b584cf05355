//! Payment methods offered at checkout.

use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed set of payment methods.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Wave mobile money (default selection).
    #[default]
    Wave,
    /// Orange Money.
    #[serde(rename = "orange")]
    OrangeMoney,
    /// Bank card.
    Card,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Wave,
        PaymentMethod::OrangeMoney,
        PaymentMethod::Card,
    ];

    /// Identifier as stored and submitted by the form.
    pub fn id(&self) -> &'static str {
        match self {
            PaymentMethod::Wave => "wave",
            PaymentMethod::OrangeMoney => "orange",
            PaymentMethod::Card => "card",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Wave => "Wave",
            PaymentMethod::OrangeMoney => "Orange Money",
            PaymentMethod::Card => "Card",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PaymentMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "wave" => Ok(PaymentMethod::Wave),
            "orange" => Ok(PaymentMethod::OrangeMoney),
            "card" => Ok(PaymentMethod::Card),
            other => Err(DomainError::UnknownPaymentMethod(other.to_string())),
        }
    }
}
