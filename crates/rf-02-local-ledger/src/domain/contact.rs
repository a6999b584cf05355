//! Contact messages kept by the local-echo archive.

use serde::{Deserialize, Serialize};
use shared_types::{contact_fields, FormSnapshot, Timestamp};
use std::collections::BTreeMap;

/// Read state of an archived message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    #[default]
    Unread,
    Read,
}

/// A contact submission as stored under `contactMessages`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    /// Millisecond timestamp, unique within the archive
    pub id: i64,
    pub status: MessageStatus,
    pub read: bool,
    pub timestamp: Timestamp,
    pub page_url: String,
    pub user_agent: String,
    pub fields: BTreeMap<String, String>,
}

impl ContactMessage {
    pub fn from_snapshot(id: i64, snapshot: &FormSnapshot) -> Self {
        Self {
            id,
            status: MessageStatus::Unread,
            read: false,
            timestamp: snapshot.submitted_at(),
            page_url: snapshot.origin_page().to_string(),
            user_agent: snapshot.client_context().to_string(),
            fields: snapshot.fields().clone(),
        }
    }

    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    /// Whether the sender opted into the newsletter.
    pub fn wants_newsletter(&self) -> bool {
        self.field(contact_fields::NEWSLETTER) == "yes"
    }
}
