//! Outbound Ports (Driven Ports / SPI)

use crate::domain::BackendError;
use async_trait::async_trait;
use shared_types::FormSnapshot;

/// Delivers a validated snapshot somewhere.
///
/// Returns the reference identifying the accepted submission. Any error is
/// turned into a `Failure` outcome by the pipeline; backends do not retry.
#[async_trait]
pub trait SubmissionBackend: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    async fn submit(&self, snapshot: &FormSnapshot) -> Result<String, BackendError>;
}
