//! Mailto backend: hands the message to the user's mail client by
//! composing a `mailto:` link. The hand-off itself cannot fail.

use crate::config::MailtoConfig;
use crate::domain::BackendError;
use crate::ports::outbound::SubmissionBackend;
use async_trait::async_trait;
use parking_lot::Mutex;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use shared_types::{contact_fields, FormSnapshot};
use tracing::info;

/// Bytes left bare in a URI component; everything else is percent-encoded.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub struct MailtoBackend {
    config: MailtoConfig,
    last_link: Mutex<Option<String>>,
}

impl MailtoBackend {
    pub fn new(config: MailtoConfig) -> Self {
        Self {
            config,
            last_link: Mutex::new(None),
        }
    }

    /// Build the `mailto:` link for a contact snapshot.
    pub fn compose(&self, snapshot: &FormSnapshot) -> String {
        let field = |name: &str| snapshot.field_or_empty(name);
        let phone = match field(contact_fields::PHONE).trim() {
            "" => "Not provided",
            phone => phone,
        };

        let subject = format!(
            "[Contact] {} - {} {}",
            field(contact_fields::SUBJECT),
            field(contact_fields::FIRST_NAME),
            field(contact_fields::LAST_NAME)
        );
        let body = format!(
            "Name: {} {}\nEmail: {}\nPhone: {}\nSubject: {}\n\nMessage:\n{}\n\n---\nSent from: {}\nDate: {}",
            field(contact_fields::FIRST_NAME),
            field(contact_fields::LAST_NAME),
            field(contact_fields::EMAIL),
            phone,
            field(contact_fields::SUBJECT),
            field(contact_fields::MESSAGE),
            snapshot.origin_page(),
            snapshot.submitted_at().format("%Y-%m-%d %H:%M:%S"),
        );

        format!(
            "mailto:{}?subject={}&body={}",
            self.config.recipient,
            utf8_percent_encode(&subject, COMPONENT),
            utf8_percent_encode(&body, COMPONENT)
        )
    }

    /// Link composed by the most recent submission.
    pub fn last_link(&self) -> Option<String> {
        self.last_link.lock().clone()
    }
}

#[async_trait]
impl SubmissionBackend for MailtoBackend {
    fn name(&self) -> &'static str {
        "mailto"
    }

    async fn submit(&self, snapshot: &FormSnapshot) -> Result<String, BackendError> {
        let link = self.compose(snapshot);
        info!(recipient = %self.config.recipient, "Message handed to mail client");
        *self.last_link.lock() = Some(link);
        Ok(format!(
            "MAIL_{}",
            snapshot.submitted_at().timestamp_millis()
        ))
    }
}
