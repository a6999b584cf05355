//! # Local Ledger
//!
//! Bounded outcome history for one form. Entries are kept most-recent-last
//! and the oldest are evicted once the configured capacity is reached.

use super::{exclusive, load, save};
use crate::config::LedgerConfig;
use crate::domain::{push_bounded, DelimitedWriter, LedgerEntry, StorageError};
use crate::ports::inbound::OutcomeSink;
use crate::ports::outbound::Persistence;
use parking_lot::Mutex;
use shared_types::{FormSnapshot, SubmissionOutcome, Timestamp};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

/// Fixed leading columns of the ledger export; field columns follow.
const LEDGER_EXPORT_COLUMNS: [&str; 4] = ["Recorded At", "Status", "Detail", "Origin Page"];

pub struct LocalLedger {
    store: Arc<dyn Persistence>,
    config: LedgerConfig,
    update_lock: Mutex<()>,
}

impl LocalLedger {
    pub fn new(store: Arc<dyn Persistence>, config: LedgerConfig) -> Self {
        Self {
            store,
            config,
            update_lock: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Append an entry, evicting the oldest entries beyond capacity.
    ///
    /// The whole sequence is rewritten in one `write`; on error the stored
    /// sequence is left as it was.
    pub fn append(&self, entry: LedgerEntry) -> Result<(), StorageError> {
        let _guard = self.update_lock.lock();
        let store = self.store.as_ref();
        let len = exclusive(store, || {
            let mut entries: Vec<LedgerEntry> = load(store, &self.config.key)?;
            push_bounded(&mut entries, entry.clone(), self.config.capacity);
            save(store, &self.config.key, &entries)?;
            Ok(entries.len())
        })?;

        debug!(
            key = %self.config.key,
            len,
            capacity = self.config.capacity,
            "Ledger entry appended"
        );
        Ok(())
    }

    /// All entries, most recent last.
    pub fn list(&self) -> Result<Vec<LedgerEntry>, StorageError> {
        load(self.store.as_ref(), &self.config.key)
    }

    pub fn len(&self) -> Result<usize, StorageError> {
        Ok(self.store.read(&self.config.key)?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        let _guard = self.update_lock.lock();
        self.store.remove(&self.config.key)
    }

    /// Render the ledger as delimited text.
    ///
    /// Columns are the fixed entry columns followed by the sorted union of
    /// all snapshot field names; a field missing from an entry is empty.
    pub fn export_as_delimited_text(&self) -> Result<String, StorageError> {
        let entries = self.list()?;
        let field_names: BTreeSet<&str> = entries
            .iter()
            .flat_map(|e| e.snapshot.fields().keys().map(String::as_str))
            .collect();

        let header: Vec<&str> = LEDGER_EXPORT_COLUMNS
            .iter()
            .copied()
            .chain(field_names.iter().copied())
            .collect();
        let mut writer = DelimitedWriter::with_header(&header)?;

        for entry in &entries {
            let recorded_at = entry.recorded_at.to_rfc3339();
            let status = entry.status.to_string();
            let mut cells = vec![
                recorded_at.as_str(),
                status.as_str(),
                entry.detail.as_str(),
                entry.snapshot.origin_page(),
            ];
            cells.extend(
                field_names
                    .iter()
                    .map(|name| entry.snapshot.field_or_empty(name)),
            );
            writer.row(&cells)?;
        }

        writer.finish()
    }
}

impl OutcomeSink for LocalLedger {
    fn name(&self) -> &str {
        &self.config.key
    }

    fn record(
        &self,
        snapshot: &FormSnapshot,
        outcome: &SubmissionOutcome,
        recorded_at: Timestamp,
    ) -> Result<(), StorageError> {
        self.append(LedgerEntry::from_outcome(snapshot, outcome, recorded_at))
    }
}
