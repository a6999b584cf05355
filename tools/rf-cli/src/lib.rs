//! RF-CLI: Reveil-Forms command line
//!
//! Drives the contact and checkout pipelines against a file-backed store and
//! exposes the local records (export, history, preferred payment).
//!
//! ## Architecture
//!
//! ```text
//! main.rs (clap) ──► App ──► SubmissionPipeline (contact | order)
//!                     │            │
//!                     │            ├─► Backend (simulated / local-echo / remote / mailto)
//!                     │            ├─► LocalLedger + OrderBook (JsonFilePersistence)
//!                     │            └─► BannerBoard
//!                     └─► ContactArchive export, history, countdown
//! ```

pub mod app;
pub mod config;

pub use app::{App, Outcome};
pub use config::{AppConfig, BackendKind, ConfigError};
