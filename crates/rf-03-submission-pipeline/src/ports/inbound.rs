//! Inbound Ports (Driving Ports / API)

use crate::domain::{PipelineError, PipelineState, SubmissionReport};
use async_trait::async_trait;
use shared_types::ValidationResult;

/// Form-facing API of one pipeline instance.
#[async_trait]
pub trait FormSubmissionApi: Send + Sync {
    /// Run one submission: capture, validate, submit, record, notify.
    ///
    /// Returns `PipelineError::Busy` without side effects when another run
    /// is in flight.
    async fn submit(&self, fields: Vec<(String, String)>) -> Result<SubmissionReport, PipelineError>;

    /// Validate a single field on blur and update its inline error.
    fn validate_field(&self, field_name: &str, raw_value: &str) -> ValidationResult;

    /// The user edited a field.
    fn field_edited(&self, field_name: &str);

    fn state(&self) -> PipelineState;
}
