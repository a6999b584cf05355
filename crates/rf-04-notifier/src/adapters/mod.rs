//! Adapters for the Notifier

use crate::domain::ContactAlternatives;
use crate::ports::inbound::Notifier;
use tracing::{info, warn};

/// Notifier that only logs. Used by headless front ends.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn report_field_error(&self, field: &str, message: &str) {
        warn!(field, message, "Field invalid");
    }

    fn report_global_error(&self, message: &str) {
        warn!(message, "Submission error");
    }

    fn report_success(&self, message: &str) {
        info!(message, "Submission succeeded");
    }

    fn report_alternative_contact(&self, alternatives: &ContactAlternatives) {
        info!(
            whatsapp = %alternatives.whatsapp_url,
            email = %alternatives.email,
            "Alternative contact offered"
        );
    }

    fn field_edited(&self, _field: &str) {}

    fn clear(&self) {}
}
