//! Adapters for the Submission Pipeline
//!
//! Concrete `SubmissionBackend` implementations. `Backend` is the closed set
//! used by front ends; each variant owns exactly what it needs.

mod local_echo;
mod mailto;
mod remote;
mod simulated;

pub use local_echo::LocalEchoBackend;
pub use mailto::MailtoBackend;
pub use remote::RemoteBackend;
pub use simulated::{ReferenceStyle, SimulatedBackend};

use crate::domain::BackendError;
use crate::ports::outbound::SubmissionBackend;
use async_trait::async_trait;
use shared_types::FormSnapshot;

/// One of the supported backends.
pub enum Backend {
    Simulated(SimulatedBackend),
    LocalEcho(LocalEchoBackend),
    Remote(RemoteBackend),
    Mailto(MailtoBackend),
}

#[async_trait]
impl SubmissionBackend for Backend {
    fn name(&self) -> &'static str {
        match self {
            Backend::Simulated(b) => b.name(),
            Backend::LocalEcho(b) => b.name(),
            Backend::Remote(b) => b.name(),
            Backend::Mailto(b) => b.name(),
        }
    }

    async fn submit(&self, snapshot: &FormSnapshot) -> Result<String, BackendError> {
        match self {
            Backend::Simulated(b) => b.submit(snapshot).await,
            Backend::LocalEcho(b) => b.submit(snapshot).await,
            Backend::Remote(b) => b.submit(snapshot).await,
            Backend::Mailto(b) => b.submit(snapshot).await,
        }
    }
}

impl From<SimulatedBackend> for Backend {
    fn from(backend: SimulatedBackend) -> Self {
        Backend::Simulated(backend)
    }
}

impl From<LocalEchoBackend> for Backend {
    fn from(backend: LocalEchoBackend) -> Self {
        Backend::LocalEcho(backend)
    }
}

impl From<RemoteBackend> for Backend {
    fn from(backend: RemoteBackend) -> Self {
        Backend::Remote(backend)
    }
}

impl From<MailtoBackend> for Backend {
    fn from(backend: MailtoBackend) -> Self {
        Backend::Mailto(backend)
    }
}
