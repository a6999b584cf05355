//! Outbound Ports (Driven Ports / SPI)
//!
//! The ledger's system of record is an injected key-value store so that it
//! can run against a file, memory, or anything else.

use crate::domain::errors::StorageError;
use serde_json::Value;

/// Key-value store holding JSON values.
///
/// `get`/`set` are the primitive operations; sequence access is layered on
/// top. Implementations must make each `set` atomic for its key. Stores
/// shared between processes also override `locked`, which the services use
/// to make a whole read-modify-write cycle exclusive.
pub trait Persistence: Send + Sync {
    /// Read the raw value under `key`, `None` if never written.
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;

    /// Replace the value under `key`.
    fn set(&self, key: &str, value: Value) -> Result<(), StorageError>;

    /// Remove the value under `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Read the sequence stored under `key`; missing keys read as empty.
    fn read(&self, key: &str) -> Result<Vec<Value>, StorageError> {
        match self.get(key)? {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(StorageError::Corrupted {
                key: key.to_string(),
                reason: format!("expected a sequence, found {}", json_kind(&other)),
            }),
        }
    }

    /// Replace the sequence stored under `key`.
    fn write(&self, key: &str, items: Vec<Value>) -> Result<(), StorageError> {
        self.set(key, Value::Array(items))
    }

    /// Run `update` while holding the store's exclusive writer lock.
    ///
    /// The default has no lock to take; in-process callers serialise
    /// through their own mutex.
    fn locked(
        &self,
        update: &mut dyn FnMut() -> Result<(), StorageError>,
    ) -> Result<(), StorageError> {
        update()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
