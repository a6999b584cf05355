//! # RF-03: Submission Pipeline Subsystem
//!
//! Orchestrates capture → validate → submit → record → notify for one form.
//!
//! ## Architecture
//!
//! - **Domain**: Pipeline states, submission report, reference generation,
//!   confirmation URL, errors
//! - **Ports**: Inbound `FormSubmissionApi`, outbound `SubmissionBackend`
//! - **Adapters**: Simulated, local-echo, remote (HTTP) and mailto backends,
//!   dispatched through the `Backend` enum
//! - **Service**: `SubmissionPipeline`, `SnapshotExtractor`
//!
//! ## State Machine
//!
//! ```text
//! Idle → Validating → Submitting → Succeeded | Failed → Idle
//!            └──────── invalid ────────────────────────→ Idle
//! ```
//!
//! A submit request while the pipeline is not `Idle` is rejected with
//! `PipelineError::Busy`; requests are never queued.
//!
//! The same pipeline serves the contact form and the book checkout; only
//! the schema, backend and outcome sinks differ.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod extractor;
pub mod ports;
pub mod service;

pub use adapters::{
    Backend, LocalEchoBackend, MailtoBackend, ReferenceStyle, RemoteBackend, SimulatedBackend,
};
pub use config::{MailtoConfig, PipelineConfig, RemoteBackendConfig, SimulatedBackendConfig};
pub use domain::*;
pub use extractor::SnapshotExtractor;
pub use ports::inbound::FormSubmissionApi;
pub use ports::outbound::SubmissionBackend;
pub use service::SubmissionPipeline;
