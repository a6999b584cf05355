//! Submission outcomes.

use crate::clock::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of one pipeline run, produced exactly once per attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SubmissionOutcome {
    /// Backend accepted the snapshot.
    #[serde(rename_all = "camelCase")]
    Success {
        reference: String,
        completed_at: Timestamp,
    },
    /// Backend rejected the snapshot, for any reason.
    Failure { reason: String },
}

impl SubmissionOutcome {
    pub fn success(reference: impl Into<String>, completed_at: Timestamp) -> Self {
        SubmissionOutcome::Success {
            reference: reference.into(),
            completed_at,
        }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        SubmissionOutcome::Failure {
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success { .. })
    }

    pub fn status(&self) -> LedgerStatus {
        match self {
            SubmissionOutcome::Success { .. } => LedgerStatus::Success,
            SubmissionOutcome::Failure { .. } => LedgerStatus::Failure,
        }
    }

    pub fn reference(&self) -> Option<&str> {
        match self {
            SubmissionOutcome::Success { reference, .. } => Some(reference),
            SubmissionOutcome::Failure { .. } => None,
        }
    }
}

/// Status recorded in a ledger entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerStatus {
    Success,
    Failure,
}

impl fmt::Display for LedgerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerStatus::Success => f.write_str("success"),
            LedgerStatus::Failure => f.write_str("failure"),
        }
    }
}
