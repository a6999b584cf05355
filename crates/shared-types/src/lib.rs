//! # Shared Types Crate
//!
//! Domain types passed between the form subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: Snapshot, validation and outcome types are
//!   defined once here and re-used by every subsystem crate.
//! - **Immutable Snapshots**: A `FormSnapshot` is captured once per attempt
//!   and never mutated afterwards.
//! - **Validation Is Data**: Invalid input is reported through
//!   `ValidationResult`, never through `Err`.

pub mod clock;
pub mod countdown;
pub mod errors;
pub mod outcome;
pub mod payment;
pub mod snapshot;
pub mod validation;

pub use clock::{FixedTimeSource, SystemTimeSource, TimeSource, Timestamp};
pub use countdown::{offer_countdown, OfferCountdown};
pub use errors::*;
pub use outcome::{LedgerStatus, SubmissionOutcome};
pub use payment::PaymentMethod;
pub use snapshot::{FormKind, FormSnapshot};
pub use validation::{ValidationReport, ValidationResult};

/// Field names exposed by the contact form.
pub mod contact_fields {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const SUBJECT: &str = "subject";
    pub const MESSAGE: &str = "message";
    pub const NEWSLETTER: &str = "newsletter";
}

/// Field names exposed by the order (checkout) form.
pub mod order_fields {
    pub const CUSTOMER_NAME: &str = "customerName";
    pub const CUSTOMER_EMAIL: &str = "customerEmail";
    pub const CUSTOMER_PHONE: &str = "customerPhone";
    pub const PAYMENT_METHOD: &str = "paymentMethod";
    pub const BOOK_TITLE: &str = "bookTitle";
    pub const BOOK_PRICE: &str = "bookPrice";
    pub const CURRENCY: &str = "currency";
}
