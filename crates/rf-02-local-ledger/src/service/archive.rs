//! # Contact Archive
//!
//! Raw contact submissions kept under `contactMessages`, with the
//! downloadable delimited export.

use super::{exclusive, load, save};
use crate::config::{keys, CONTACT_MESSAGES_CAPACITY};
use crate::domain::{push_bounded, ContactMessage, DelimitedWriter, StorageError};
use crate::ports::outbound::Persistence;
use parking_lot::Mutex;
use shared_types::{contact_fields, FormSnapshot, TimeSource};
use std::sync::Arc;
use tracing::{debug, info};

/// Header row of the contact export.
pub const CONTACT_EXPORT_HEADER: [&str; 9] = [
    "ID",
    "Date",
    "First Name",
    "Last Name",
    "Email",
    "Phone",
    "Subject",
    "Message",
    "Newsletter",
];

/// Result of storing one message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoredMessage {
    pub id: i64,
    /// Messages in the archive after the store
    pub count: usize,
}

/// A rendered export ready to be offered as a download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactExport {
    pub file_name: String,
    pub content: String,
    pub rows: usize,
}

pub struct ContactArchive {
    store: Arc<dyn Persistence>,
    clock: Arc<dyn TimeSource>,
    capacity: usize,
    update_lock: Mutex<()>,
}

impl ContactArchive {
    pub fn new(store: Arc<dyn Persistence>, clock: Arc<dyn TimeSource>) -> Self {
        Self::with_capacity(store, clock, CONTACT_MESSAGES_CAPACITY)
    }

    pub fn with_capacity(
        store: Arc<dyn Persistence>,
        clock: Arc<dyn TimeSource>,
        capacity: usize,
    ) -> Self {
        Self {
            store,
            clock,
            capacity,
            update_lock: Mutex::new(()),
        }
    }

    /// Store a contact snapshot as an unread message.
    ///
    /// The id is the submission's millisecond timestamp, bumped past the
    /// newest stored id when two submissions share a millisecond.
    pub fn store(&self, snapshot: &FormSnapshot) -> Result<StoredMessage, StorageError> {
        let _guard = self.update_lock.lock();
        let store = self.store.as_ref();
        let stored = exclusive(store, || {
            let mut messages: Vec<ContactMessage> = load(store, keys::CONTACT_MESSAGES)?;

            let mut id = snapshot.submitted_at().timestamp_millis();
            if let Some(newest) = messages.iter().map(|m| m.id).max() {
                if id <= newest {
                    id = newest + 1;
                }
            }

            push_bounded(
                &mut messages,
                ContactMessage::from_snapshot(id, snapshot),
                self.capacity,
            );
            save(store, keys::CONTACT_MESSAGES, &messages)?;
            Ok(StoredMessage {
                id,
                count: messages.len(),
            })
        })?;

        debug!(id = stored.id, count = stored.count, "Contact message archived");
        Ok(stored)
    }

    /// All archived messages, oldest first.
    pub fn list(&self) -> Result<Vec<ContactMessage>, StorageError> {
        load(self.store.as_ref(), keys::CONTACT_MESSAGES)
    }

    pub fn len(&self) -> Result<usize, StorageError> {
        Ok(self.store.read(keys::CONTACT_MESSAGES)?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }

    /// Render the archive as a delimited document named after today's date.
    pub fn export_contact_messages(&self) -> Result<ContactExport, StorageError> {
        let messages = self.list()?;
        if messages.is_empty() {
            return Err(StorageError::NothingToExport);
        }

        let mut writer = DelimitedWriter::with_header(&CONTACT_EXPORT_HEADER)?;
        for message in &messages {
            let id = message.id.to_string();
            let date = message.timestamp.format("%Y-%m-%d %H:%M:%S").to_string();
            let newsletter = if message.wants_newsletter() { "Yes" } else { "No" };
            writer.row([
                id.as_str(),
                date.as_str(),
                message.field(contact_fields::FIRST_NAME),
                message.field(contact_fields::LAST_NAME),
                message.field(contact_fields::EMAIL),
                message.field(contact_fields::PHONE),
                message.field(contact_fields::SUBJECT),
                message.field(contact_fields::MESSAGE),
                newsletter,
            ])?;
        }

        let file_name = format!("contacts_{}.csv", self.clock.now().format("%Y-%m-%d"));
        info!(file = %file_name, rows = messages.len(), "Contact export rendered");

        Ok(ContactExport {
            file_name,
            content: writer.finish()?,
            rows: messages.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryPersistence;
    use crate::domain::{parse_delimited, MessageStatus};
    use chrono::{TimeZone, Utc};
    use shared_types::{FixedTimeSource, FormKind, Timestamp};

    fn at() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap()
    }

    fn archive() -> ContactArchive {
        ContactArchive::new(
            Arc::new(InMemoryPersistence::new()),
            Arc::new(FixedTimeSource(at())),
        )
    }

    fn snapshot(first_name: &str, message: &str, newsletter: &str) -> FormSnapshot {
        FormSnapshot::capture(
            FormKind::Contact,
            [
                ("firstName", first_name),
                ("lastName", "Diallo"),
                ("email", "amy@example.com"),
                ("phone", ""),
                ("subject", "general"),
                ("message", message),
                ("newsletter", newsletter),
            ],
            at(),
            "contact.html",
            "agent",
        )
    }

    #[test]
    fn test_store_returns_count_and_unread() {
        let archive = archive();
        let stored = archive.store(&snapshot("Amy", "Hello, I have a question.", "")).unwrap();
        assert_eq!(stored.count, 1);
        assert_eq!(stored.id, at().timestamp_millis());

        let messages = archive.list().unwrap();
        assert_eq!(messages[0].status, MessageStatus::Unread);
        assert!(!messages[0].read);
    }

    #[test]
    fn test_same_millisecond_ids_stay_unique() {
        let archive = archive();
        let a = archive.store(&snapshot("Amy", "first question", "")).unwrap();
        let b = archive.store(&snapshot("Amy", "second question", "")).unwrap();
        assert_eq!(b.id, a.id + 1);
    }

    #[test]
    fn test_archive_bound_keeps_most_recent() {
        let archive = ContactArchive::with_capacity(
            Arc::new(InMemoryPersistence::new()),
            Arc::new(FixedTimeSource(at())),
            2,
        );
        for name in ["One", "Two", "Three"] {
            archive.store(&snapshot(name, "a long enough message", "")).unwrap();
        }
        let names: Vec<String> = archive
            .list()
            .unwrap()
            .iter()
            .map(|m| m.field("firstName").to_string())
            .collect();
        assert_eq!(names, vec!["Two", "Three"]);
    }

    #[test]
    fn test_export_empty_archive() {
        let err = archive().export_contact_messages().unwrap_err();
        assert!(matches!(err, StorageError::NothingToExport));
    }

    #[test]
    fn test_export_layout_and_round_trip() {
        let archive = archive();
        let tricky = "He said \"hi\", then\nleft";
        archive.store(&snapshot("Amy", tricky, "yes")).unwrap();
        archive.store(&snapshot("Awa, Jr.", "Plain message here", "")).unwrap();

        let export = archive.export_contact_messages().unwrap();
        assert_eq!(export.file_name, "contacts_2024-05-17.csv");
        assert_eq!(export.rows, 2);
        assert!(export
            .content
            .starts_with("ID,Date,First Name,Last Name,Email,Phone,Subject,Message,Newsletter\n"));

        let rows = parse_delimited(&export.content).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1][1], "2024-05-17 09:30:00");
        assert_eq!(rows[1][7], tricky);
        assert_eq!(rows[1][8], "Yes");
        assert_eq!(rows[2][2], "Awa, Jr.");
        assert_eq!(rows[2][8], "No");
    }
}
