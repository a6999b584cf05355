//! Error types for the Submission Pipeline

use thiserror::Error;

/// Errors returned to the caller of `submit`.
///
/// Validation failures and backend failures are not errors here: they are
/// reported through `SubmissionReport`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// A submission is already in flight
    #[error("A submission is already in progress")]
    Busy,

    /// Backend could not be constructed
    #[error("Backend setup failed: {0}")]
    Backend(String),

    /// Confirmation link could not be built
    #[error("Invalid confirmation URL: {0}")]
    Confirmation(String),
}

/// Reasons a backend call did not succeed. All of them collapse into a
/// `SubmissionOutcome::Failure` carrying the display text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// Connection or protocol failure
    #[error("Network error: {0}")]
    Transport(String),

    /// Remote answered but did not accept the submission
    #[error("Submission rejected: {0}")]
    Rejected(String),

    /// Remote answer could not be understood
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Simulated failure
    #[error("{0}")]
    SimulatedFailure(String),

    /// No answer within the configured bound
    #[error("Submission timed out after {0} ms")]
    Timeout(u64),
}
