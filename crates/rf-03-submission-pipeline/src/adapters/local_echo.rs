//! Local-echo backend: no network, the submission is stored in the contact
//! archive and accepted.

use crate::domain::BackendError;
use crate::ports::outbound::SubmissionBackend;
use async_trait::async_trait;
use rf_02_local_ledger::ContactArchive;
use shared_types::FormSnapshot;
use std::sync::Arc;
use tracing::info;

/// Accepts every submission the archive can store.
///
/// A failed archive write (a full store, for one) is the one way this
/// backend fails; the pipeline then reports a `Failure` outcome.
pub struct LocalEchoBackend {
    archive: Arc<ContactArchive>,
}

impl LocalEchoBackend {
    pub fn new(archive: Arc<ContactArchive>) -> Self {
        Self { archive }
    }

    pub fn archive(&self) -> &Arc<ContactArchive> {
        &self.archive
    }
}

#[async_trait]
impl SubmissionBackend for LocalEchoBackend {
    fn name(&self) -> &'static str {
        "local-echo"
    }

    async fn submit(&self, snapshot: &FormSnapshot) -> Result<String, BackendError> {
        let stored = self
            .archive
            .store(snapshot)
            .map_err(|e| BackendError::Rejected(format!("local store failed: {e}")))?;

        info!(id = stored.id, count = stored.count, "Message saved locally");
        Ok(format!("MSG_{}", stored.id))
    }
}
