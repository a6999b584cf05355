//! Ledger entries.

use serde::{Deserialize, Serialize};
use shared_types::{FormSnapshot, LedgerStatus, SubmissionOutcome, Timestamp};

/// One recorded submission attempt.
///
/// Created only from a produced `SubmissionOutcome`; there are no partial
/// entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub status: LedgerStatus,
    pub snapshot: FormSnapshot,
    pub recorded_at: Timestamp,
    /// Reference on success, reason on failure.
    pub detail: String,
}

impl LedgerEntry {
    pub fn from_outcome(
        snapshot: &FormSnapshot,
        outcome: &SubmissionOutcome,
        recorded_at: Timestamp,
    ) -> Self {
        let detail = match outcome {
            SubmissionOutcome::Success { reference, .. } => reference.clone(),
            SubmissionOutcome::Failure { reason } => reason.clone(),
        };
        Self {
            status: outcome.status(),
            snapshot: snapshot.clone(),
            recorded_at,
            detail,
        }
    }
}
