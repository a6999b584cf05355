//! Pipeline states and per-run reports.

use serde::{Deserialize, Serialize};
use shared_types::{FormSnapshot, SubmissionOutcome, ValidationReport};
use std::fmt;

/// Where a pipeline is in its run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

impl PipelineState {
    /// Whether a new submission may start.
    pub fn accepts_submissions(&self) -> bool {
        matches!(self, PipelineState::Idle)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineState::Succeeded | PipelineState::Failed)
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineState::Idle => "idle",
            PipelineState::Validating => "validating",
            PipelineState::Submitting => "submitting",
            PipelineState::Succeeded => "succeeded",
            PipelineState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Result of one accepted submit request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionReport {
    /// Validation failed; the backend was not called
    Rejected(ValidationReport),
    /// The backend was called with `snapshot` and produced `outcome`
    Completed {
        snapshot: FormSnapshot,
        outcome: SubmissionOutcome,
    },
}

impl SubmissionReport {
    pub fn outcome(&self) -> Option<&SubmissionOutcome> {
        match self {
            SubmissionReport::Completed { outcome, .. } => Some(outcome),
            SubmissionReport::Rejected(_) => None,
        }
    }

    /// Values the backend was called with.
    pub fn snapshot(&self) -> Option<&FormSnapshot> {
        match self {
            SubmissionReport::Completed { snapshot, .. } => Some(snapshot),
            SubmissionReport::Rejected(_) => None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome().is_some_and(SubmissionOutcome::is_success)
    }

    /// State the pipeline passed through before returning to idle.
    pub fn final_state(&self) -> PipelineState {
        match self {
            SubmissionReport::Rejected(_) => PipelineState::Idle,
            SubmissionReport::Completed { outcome, .. } if outcome.is_success() => {
                PipelineState::Succeeded
            }
            SubmissionReport::Completed { .. } => PipelineState::Failed,
        }
    }
}
