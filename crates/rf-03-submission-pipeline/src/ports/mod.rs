//! Ports module for the Submission Pipeline

pub mod inbound;
pub mod outbound;

pub use inbound::FormSubmissionApi;
pub use outbound::SubmissionBackend;
