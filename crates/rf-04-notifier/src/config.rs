//! Configuration for the Notifier Subsystem

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Notifier configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifierConfig {
    /// How long success/error banners stay visible (milliseconds)
    pub banner_ttl_ms: u64,
    /// How long the alternative-contact hint stays visible (milliseconds)
    pub alternative_contact_ttl_ms: u64,
    /// Buffered notices per subscriber before lagging ones are dropped
    pub channel_capacity: usize,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            banner_ttl_ms: 5_000,
            alternative_contact_ttl_ms: 10_000,
            channel_capacity: 64,
        }
    }
}

impl NotifierConfig {
    pub fn banner_ttl(&self) -> Duration {
        Duration::from_millis(self.banner_ttl_ms)
    }

    pub fn alternative_contact_ttl(&self) -> Duration {
        Duration::from_millis(self.alternative_contact_ttl_ms)
    }
}
