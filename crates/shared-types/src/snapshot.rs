//! # Form Snapshot
//!
//! Immutable capture of a form's field values plus derived metadata
//! (`submittedAt`, `originPage`, `clientContext`).

use crate::clock::Timestamp;
use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Which form a snapshot was captured from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    /// Contact form (`contact.html`).
    Contact,
    /// Book checkout form.
    Order,
}

impl FormKind {
    /// Stable identifier used in logs and persisted records.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Contact => "contact",
            FormKind::Order => "order",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contact" => Ok(FormKind::Contact),
            "order" => Ok(FormKind::Order),
            other => Err(DomainError::UnknownFormKind(other.to_string())),
        }
    }
}

/// Immutable record of one submission attempt.
///
/// Field names are unique keys; ordering is irrelevant (stored sorted).
/// Created fresh per attempt and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    kind: FormKind,
    fields: BTreeMap<String, String>,
    submitted_at: Timestamp,
    origin_page: String,
    client_context: String,
}

impl FormSnapshot {
    /// Capture a snapshot from raw field values and derived metadata.
    pub fn capture<I, K, V>(
        kind: FormKind,
        fields: I,
        submitted_at: Timestamp,
        origin_page: impl Into<String>,
        client_context: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            kind,
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            submitted_at,
            origin_page: origin_page.into(),
            client_context: client_context.into(),
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    /// Value of a field, if the form carried it.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Value of a field, or the empty string when absent.
    pub fn field_or_empty(&self, name: &str) -> &str {
        self.field(name).unwrap_or("")
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn submitted_at(&self) -> Timestamp {
        self.submitted_at
    }

    pub fn origin_page(&self) -> &str {
        &self.origin_page
    }

    pub fn client_context(&self) -> &str {
        &self.client_context
    }
}
