//! Adapters for the Local Ledger
//!
//! Implementations of the `Persistence` port.

pub mod file;
pub mod memory;

pub use file::JsonFilePersistence;
pub use memory::InMemoryPersistence;
