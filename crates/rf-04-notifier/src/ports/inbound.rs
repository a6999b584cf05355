//! Inbound Ports (Driving Ports / API)

use crate::domain::ContactAlternatives;

/// Notification API used by the submission pipeline and the form layer.
///
/// Reporting never fails; a notifier that cannot display something drops it.
pub trait Notifier: Send + Sync {
    /// Attach an inline error to `field`, replacing any previous one.
    fn report_field_error(&self, field: &str, message: &str);

    /// Show the global error banner, replacing the current one.
    fn report_global_error(&self, message: &str);

    /// Show the global success banner, replacing the current one.
    fn report_success(&self, message: &str);

    /// Offer direct contact channels after a failed send.
    fn report_alternative_contact(&self, alternatives: &ContactAlternatives);

    /// The user edited `field`; its inline error goes away.
    fn field_edited(&self, field: &str);

    /// Remove every field error and banner.
    fn clear(&self);
}
