//! Notices emitted to the presentation layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Kind of global banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    Success,
    Error,
}

impl fmt::Display for BannerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BannerKind::Success => write!(f, "success"),
            BannerKind::Error => write!(f, "error"),
        }
    }
}

/// Direct channels offered when the contact form could not be sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactAlternatives {
    pub whatsapp_url: String,
    pub email: String,
}

impl ContactAlternatives {
    pub fn new(whatsapp_url: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            whatsapp_url: whatsapp_url.into(),
            email: email.into(),
        }
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

impl Default for ContactAlternatives {
    fn default() -> Self {
        Self::new("https://wa.me/221781234567", "contact@reveilinterieur.sn")
    }
}

/// A change in what the user should see.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notice {
    FieldError { field: String, message: String },
    FieldCleared { field: String },
    Banner { kind: BannerKind, message: String },
    BannerCleared { kind: BannerKind },
    AlternativeContact(ContactAlternatives),
    Cleared,
}

/// What is visible right now.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifierView {
    pub field_errors: BTreeMap<String, String>,
    pub success: Option<String>,
    pub error: Option<String>,
    pub alternative_contact: Option<ContactAlternatives>,
}

impl NotifierView {
    pub fn is_empty(&self) -> bool {
        self.field_errors.is_empty()
            && self.success.is_none()
            && self.error.is_none()
            && self.alternative_contact.is_none()
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }
}
