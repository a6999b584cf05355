//! Domain module for the Local Ledger
//!
//! Contains entries, records, the FIFO bound, export format and errors.

pub mod bounded;
pub mod contact;
pub mod entry;
pub mod errors;
pub mod export;
pub mod order;

pub use bounded::push_bounded;
pub use contact::{ContactMessage, MessageStatus};
pub use entry::LedgerEntry;
pub use errors::StorageError;
pub use export::{parse_delimited, DelimitedWriter};
pub use order::{OrderRecord, OrderStatus};
