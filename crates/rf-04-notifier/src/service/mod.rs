//! # Banner Board
//!
//! Stateful notifier. Banners carry a deadline and are pruned lazily on
//! every read, so no timer task is needed; `tokio::time::Instant` keeps the
//! expiry testable with a paused clock. Every change is also broadcast as a
//! [`Notice`] to subscribers.

use crate::config::NotifierConfig;
use crate::domain::{BannerKind, ContactAlternatives, Notice, NotifierView};
use crate::ports::inbound::Notifier;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use tokio::sync::broadcast;
use tokio::time::Instant;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
struct Timed<T> {
    value: T,
    expires_at: Instant,
}

impl<T> Timed<T> {
    fn live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

#[derive(Debug, Default)]
struct BoardState {
    field_errors: BTreeMap<String, String>,
    success: Option<Timed<String>>,
    error: Option<Timed<String>>,
    alternative_contact: Option<Timed<ContactAlternatives>>,
}

impl BoardState {
    fn prune(&mut self, now: Instant) {
        if self.success.as_ref().is_some_and(|b| !b.live(now)) {
            self.success = None;
        }
        if self.error.as_ref().is_some_and(|b| !b.live(now)) {
            self.error = None;
        }
        if self.alternative_contact.as_ref().is_some_and(|b| !b.live(now)) {
            self.alternative_contact = None;
        }
    }

    fn banner_mut(&mut self, kind: BannerKind) -> &mut Option<Timed<String>> {
        match kind {
            BannerKind::Success => &mut self.success,
            BannerKind::Error => &mut self.error,
        }
    }
}

pub struct BannerBoard {
    config: NotifierConfig,
    state: Mutex<BoardState>,
    sender: broadcast::Sender<Notice>,
}

impl BannerBoard {
    pub fn new() -> Self {
        Self::with_config(NotifierConfig::default())
    }

    pub fn with_config(config: NotifierConfig) -> Self {
        let (sender, _) = broadcast::channel(config.channel_capacity.max(1));
        Self {
            config,
            state: Mutex::new(BoardState::default()),
            sender,
        }
    }

    pub fn config(&self) -> &NotifierConfig {
        &self.config
    }

    /// Receive every notice emitted after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.sender.subscribe()
    }

    /// Current visible state with expired banners removed.
    pub fn view(&self) -> NotifierView {
        let mut state = self.state.lock();
        state.prune(Instant::now());
        NotifierView {
            field_errors: state.field_errors.clone(),
            success: state.success.as_ref().map(|b| b.value.clone()),
            error: state.error.as_ref().map(|b| b.value.clone()),
            alternative_contact: state.alternative_contact.as_ref().map(|b| b.value.clone()),
        }
    }

    /// Hide a banner before its deadline.
    pub fn dismiss(&self, kind: BannerKind) {
        let removed = self.state.lock().banner_mut(kind).take().is_some();
        if removed {
            self.publish(Notice::BannerCleared { kind });
        }
    }

    pub fn dismiss_alternative_contact(&self) {
        self.state.lock().alternative_contact = None;
    }

    fn show_banner(&self, kind: BannerKind, message: &str) {
        let expires_at = Instant::now() + self.config.banner_ttl();
        *self.state.lock().banner_mut(kind) = Some(Timed {
            value: message.to_string(),
            expires_at,
        });
        self.publish(Notice::Banner {
            kind,
            message: message.to_string(),
        });
    }

    fn publish(&self, notice: Notice) {
        // No subscribers is normal; the board state is the source of truth.
        if let Ok(receivers) = self.sender.send(notice) {
            debug!(receivers, "Notice published");
        }
    }
}

impl Default for BannerBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for BannerBoard {
    fn report_field_error(&self, field: &str, message: &str) {
        self.state
            .lock()
            .field_errors
            .insert(field.to_string(), message.to_string());
        self.publish(Notice::FieldError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    fn report_global_error(&self, message: &str) {
        warn!(message, "Global error reported");
        self.show_banner(BannerKind::Error, message);
    }

    fn report_success(&self, message: &str) {
        self.show_banner(BannerKind::Success, message);
    }

    fn report_alternative_contact(&self, alternatives: &ContactAlternatives) {
        let expires_at = Instant::now() + self.config.alternative_contact_ttl();
        self.state.lock().alternative_contact = Some(Timed {
            value: alternatives.clone(),
            expires_at,
        });
        self.publish(Notice::AlternativeContact(alternatives.clone()));
    }

    fn field_edited(&self, field: &str) {
        let removed = self.state.lock().field_errors.remove(field).is_some();
        if removed {
            self.publish(Notice::FieldCleared {
                field: field.to_string(),
            });
        }
    }

    fn clear(&self) {
        *self.state.lock() = BoardState::default();
        self.publish(Notice::Cleared);
    }
}
