//! Configuration for the Local Ledger Subsystem

use serde::{Deserialize, Serialize};

/// Logical storage keys.
pub mod keys {
    pub const CONTACT_MESSAGES: &str = "contactMessages";
    pub const CONTACT_FORM_HISTORY: &str = "contactFormHistory";
    pub const ORDER_FORM_HISTORY: &str = "orderFormHistory";
    pub const ORDER_HISTORY: &str = "orderHistory";
    pub const LAST_ORDER: &str = "lastOrder";
    pub const PREFERRED_PAYMENT: &str = "preferredPayment";
}

/// Maximum raw contact submissions kept.
pub const CONTACT_MESSAGES_CAPACITY: usize = 100;

/// Maximum outcome-history entries kept per form.
pub const HISTORY_CAPACITY: usize = 50;

/// Maximum order records kept.
pub const ORDER_HISTORY_CAPACITY: usize = 50;

/// Ledger configuration: where entries live and how many are kept.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Storage key holding the entry sequence
    pub key: String,
    /// Maximum entries retained (oldest evicted first)
    pub capacity: usize,
}

impl LedgerConfig {
    pub fn new(key: impl Into<String>, capacity: usize) -> Self {
        Self {
            key: key.into(),
            capacity,
        }
    }

    /// Outcome history of the contact form.
    pub fn contact_history() -> Self {
        Self::new(keys::CONTACT_FORM_HISTORY, HISTORY_CAPACITY)
    }

    /// Outcome history of the checkout form.
    pub fn order_history() -> Self {
        Self::new(keys::ORDER_FORM_HISTORY, HISTORY_CAPACITY)
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self::contact_history()
    }
}
