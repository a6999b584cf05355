//! Shared fixtures for the integration flows.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use parking_lot::Mutex;
use rf_02_local_ledger::{InMemoryPersistence, Persistence, StorageError};
use rf_03_submission_pipeline::{BackendError, SnapshotExtractor, SubmissionBackend};
use serde_json::Value;
use shared_types::{FixedTimeSource, FormSnapshot, TimeSource, Timestamp};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

pub fn fixed_now() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 9, 14, 10, 30, 0).unwrap()
}

pub fn clock() -> Arc<dyn TimeSource> {
    Arc::new(FixedTimeSource(fixed_now()))
}

pub fn extractor(page: &str) -> SnapshotExtractor {
    SnapshotExtractor::new(page, "integration-agent", clock())
}

fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn valid_contact() -> Vec<(String, String)> {
    contact_with_email("fatou.sow@example.sn")
}

pub fn contact_with_email(email: &str) -> Vec<(String, String)> {
    owned(&[
        ("firstName", "Fatou"),
        ("lastName", "Sow"),
        ("email", email),
        ("phone", "+221 77 000 00 00"),
        ("subject", "order"),
        ("message", "Is the book available in Wolof as well?"),
        ("newsletter", "yes"),
    ])
}

pub fn valid_order(method: &str) -> Vec<(String, String)> {
    order_for("Ibrahima Ndiaye", "ibrahima@example.sn", method)
}

pub fn order_for(name: &str, email: &str, method: &str) -> Vec<(String, String)> {
    owned(&[
        ("customerName", name),
        ("customerEmail", email),
        ("customerPhone", "+221 76 111 22 33"),
        ("paymentMethod", method),
    ])
}

/// Shared in-memory store whose writes to one key fail as a full store's would.
pub struct RejectingStore {
    pub inner: Arc<InMemoryPersistence>,
    pub key: &'static str,
}

impl Persistence for RejectingStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        if key == self.key {
            return Err(StorageError::QuotaExceeded {
                key: key.to_string(),
                size: 1,
                limit: 0,
            });
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

/// Backend that either answers immediately or waits for `release`.
pub struct ScriptedBackend {
    result: Result<String, BackendError>,
    hold: Option<Arc<Notify>>,
    pub seen: Mutex<Vec<FormSnapshot>>,
    pub calls: AtomicUsize,
}

impl ScriptedBackend {
    pub fn ok(reference: &str) -> Self {
        Self {
            result: Ok(reference.to_string()),
            hold: None,
            seen: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn err(error: BackendError) -> Self {
        Self {
            result: Err(error),
            ..Self::ok("")
        }
    }

    pub fn held(reference: &str, release: Arc<Notify>) -> Self {
        Self {
            hold: Some(release),
            ..Self::ok(reference)
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SubmissionBackend for ScriptedBackend {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn submit(&self, snapshot: &FormSnapshot) -> Result<String, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().push(snapshot.clone());
        if let Some(release) = &self.hold {
            release.notified().await;
        }
        self.result.clone()
    }
}
