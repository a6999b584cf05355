//! Services for the Local Ledger
//!
//! Each service owns one or more storage keys. Read-modify-write cycles run
//! behind the service's mutex and inside `Persistence::locked`, so neither
//! threads sharing a handle nor processes sharing a store lose appends.

mod archive;
mod ledger;
mod order_book;

pub use archive::{ContactArchive, ContactExport, StoredMessage, CONTACT_EXPORT_HEADER};
pub use ledger::LocalLedger;
pub use order_book::OrderBook;

use crate::domain::errors::StorageError;
use crate::ports::outbound::Persistence;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Read and decode the sequence under `key`.
fn load<T: DeserializeOwned>(store: &dyn Persistence, key: &str) -> Result<Vec<T>, StorageError> {
    store
        .read(key)?
        .into_iter()
        .map(|value| serde_json::from_value(value).map_err(StorageError::from))
        .collect()
}

/// Encode and replace the sequence under `key`.
fn save<T: Serialize>(store: &dyn Persistence, key: &str, items: &[T]) -> Result<(), StorageError> {
    let values = items
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?;
    store.write(key, values)
}

/// Run `update` inside the store's writer lock and hand back its result.
fn exclusive<R>(
    store: &dyn Persistence,
    mut update: impl FnMut() -> Result<R, StorageError>,
) -> Result<R, StorageError> {
    let mut result = None;
    store.locked(&mut || {
        result = Some(update()?);
        Ok(())
    })?;
    result.ok_or_else(|| StorageError::Lock("update did not run".to_string()))
}
