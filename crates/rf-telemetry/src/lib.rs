//! # Reveil-Forms Telemetry
//!
//! Logging bootstrap shared by every binary of the workspace. Library crates
//! only emit `tracing` events; installing the subscriber is left to the
//! binary through [`init_logging`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rf_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let _guard = init_logging(&TelemetryConfig::from_env())?;
//!     // ...
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `RF_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `RF_JSON_LOGS` | `false` | Emit JSON lines instead of text |
//! | `RF_SERVICE_NAME` | `reveil-forms` | Service name attached to the startup event |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{init_logging, LoggingGuard};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },
}

/// Log a submission-pipeline event tagged with its form kind.
///
/// # Example
///
/// ```rust,ignore
/// log_submission_event!(info, FormKind::Contact, "Submission succeeded", reference = %reference);
/// ```
#[macro_export]
macro_rules! log_submission_event {
    ($level:ident, $form:expr, $msg:literal $(, $($field:tt)*)?) => {
        tracing::$level!(
            form = %$form,
            $($($field)*,)?
            $msg
        )
    };
}
