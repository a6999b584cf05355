//! # RF-04: Notifier Subsystem
//!
//! Surfaces validation and submission state to the presentation layer.
//!
//! ## Architecture
//!
//! - **Domain**: Banners, contact alternatives, notices and the view snapshot
//! - **Ports**: Inbound `Notifier` trait
//! - **Service**: `BannerBoard` (stateful, expiring, broadcasting)
//! - **Adapters**: `TracingNotifier` (log-only)
//!
//! ## Policy
//!
//! - Field errors stay until the field is edited or `clear` is called.
//! - Success and error banners expire after `banner_ttl` unless dismissed.
//! - At most one banner of each kind is visible; a new one replaces it.
//! - The alternative-contact hint expires after `alternative_contact_ttl`.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::TracingNotifier;
pub use config::NotifierConfig;
pub use domain::*;
pub use ports::inbound::Notifier;
pub use service::BannerBoard;
