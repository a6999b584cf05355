//! # In-Memory Store
//!
//! HashMap-backed `Persistence` for tests and single-process use. An optional
//! byte quota mimics the size limit of a browser store.

use crate::domain::errors::StorageError;
use crate::ports::outbound::Persistence;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;

/// In-memory key-value store.
#[derive(Debug, Default)]
pub struct InMemoryPersistence {
    values: RwLock<HashMap<String, Value>>,
    /// Maximum encoded size of a single value, in bytes
    quota: Option<usize>,
}

impl InMemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose `set` fails once a value's encoded size exceeds `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
            quota: Some(bytes),
        }
    }

    /// Number of keys currently held.
    pub fn key_count(&self) -> usize {
        self.values.read().len()
    }
}

impl Persistence for InMemoryPersistence {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        if let Some(limit) = self.quota {
            let size = serde_json::to_vec(&value)?.len();
            if size > limit {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    size,
                    limit,
                });
            }
        }
        self.values.write().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.values.write().remove(key);
        Ok(())
    }
}
