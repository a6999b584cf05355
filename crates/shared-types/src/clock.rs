//! Time source abstraction.
//!
//! Abstracted so snapshots, ledger entries and references can be produced
//! with deterministic time in tests.

use chrono::{DateTime, Utc};

/// Wall-clock timestamp used throughout the workspace.
pub type Timestamp = DateTime<Utc>;

/// Time source for consistent timestamp handling.
pub trait TimeSource: Send + Sync {
    /// Returns the current timestamp.
    fn now(&self) -> Timestamp;
}

/// Default system time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}

/// Time source pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeSource(pub Timestamp);

impl TimeSource for FixedTimeSource {
    fn now(&self) -> Timestamp {
        self.0
    }
}
