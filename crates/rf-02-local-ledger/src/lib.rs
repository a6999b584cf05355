//! # RF-02: Local Ledger Subsystem
//!
//! Bounded, append-only local records kept in an injected key-value store.
//!
//! ## Architecture
//!
//! - **Domain**: Ledger entries, contact messages, order records, FIFO bound,
//!   delimited-text export
//! - **Ports**: Outbound `Persistence` (key-value store), inbound `OutcomeSink`
//! - **Adapters**: `InMemoryPersistence`, `JsonFilePersistence`
//! - **Service**: `LocalLedger`, `ContactArchive`, `OrderBook`
//!
//! ## Persisted Layout
//!
//! | Key | Content | Bound |
//! |-----|---------|-------|
//! | `contactMessages` | raw contact submissions | 100 |
//! | `contactFormHistory` | contact outcome history | 50 |
//! | `orderFormHistory` | checkout outcome history | 50 |
//! | `orderHistory` | order records | 50 |
//! | `lastOrder` | most recent order record | 1 |
//! | `preferredPayment` | last selected payment method id | 1 |
//!
//! Every bound evicts the oldest entries first.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::{InMemoryPersistence, JsonFilePersistence};
pub use config::{keys, LedgerConfig};
pub use domain::errors::StorageError;
pub use domain::*;
pub use ports::inbound::OutcomeSink;
pub use ports::outbound::Persistence;
pub use service::{ContactArchive, ContactExport, LocalLedger, OrderBook, StoredMessage};
