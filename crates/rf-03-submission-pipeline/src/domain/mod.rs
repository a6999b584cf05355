//! Domain module for the Submission Pipeline

pub mod confirmation;
pub mod errors;
pub mod reference;
pub mod state;

pub use confirmation::confirmation_url;
pub use errors::{BackendError, PipelineError};
pub use reference::{message_reference, order_reference};
pub use state::{PipelineState, SubmissionReport};
