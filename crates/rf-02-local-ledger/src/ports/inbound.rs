//! Inbound Ports (Driving Ports / API)

use crate::domain::errors::StorageError;
use shared_types::{FormSnapshot, SubmissionOutcome, Timestamp};

/// Anything that records pipeline outcomes.
///
/// Called once per produced outcome. Implementations must not partially
/// record: either the whole record lands or an error is returned.
pub trait OutcomeSink: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Record the outcome of one submission attempt.
    fn record(
        &self,
        snapshot: &FormSnapshot,
        outcome: &SubmissionOutcome,
        recorded_at: Timestamp,
    ) -> Result<(), StorageError>;
}
