//! Book orders.

use serde::{Deserialize, Serialize};
use shared_types::{order_fields, FormSnapshot, PaymentMethod, SubmissionOutcome, Timestamp};

/// Title of the book sold by the storefront.
pub const BOOK_TITLE: &str = "Réveille Ton Potentiel";

/// Price in the smallest currency unit.
pub const BOOK_PRICE: &str = "9900";

pub const CURRENCY: &str = "XOF";

/// Order lifecycle as tracked locally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Payment handed off, confirmation pending
    #[default]
    Pending,
}

/// An order as stored under `orderHistory` and `lastOrder`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub order_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub payment_method: PaymentMethod,
    pub book_title: String,
    pub book_price: String,
    pub currency: String,
    pub status: OrderStatus,
    pub created_at: Timestamp,
    pub completed_at: Timestamp,
}

impl OrderRecord {
    /// Build an order from a validated checkout snapshot.
    ///
    /// A blank or unknown payment method falls back to the default.
    pub fn from_snapshot(
        order_id: impl Into<String>,
        snapshot: &FormSnapshot,
        completed_at: Timestamp,
    ) -> Self {
        let field = |name: &str, fallback: &str| {
            snapshot
                .field(name)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(fallback)
                .to_string()
        };

        Self {
            order_id: order_id.into(),
            customer_name: field(order_fields::CUSTOMER_NAME, ""),
            customer_email: field(order_fields::CUSTOMER_EMAIL, ""),
            customer_phone: field(order_fields::CUSTOMER_PHONE, ""),
            payment_method: snapshot
                .field_or_empty(order_fields::PAYMENT_METHOD)
                .parse()
                .unwrap_or_default(),
            book_title: field(order_fields::BOOK_TITLE, BOOK_TITLE),
            book_price: field(order_fields::BOOK_PRICE, BOOK_PRICE),
            currency: field(order_fields::CURRENCY, CURRENCY),
            status: OrderStatus::Pending,
            created_at: snapshot.submitted_at(),
            completed_at,
        }
    }

    /// The order a checkout run produced, keyed by its success reference.
    pub fn from_outcome(snapshot: &FormSnapshot, outcome: &SubmissionOutcome) -> Option<Self> {
        match outcome {
            SubmissionOutcome::Success {
                reference,
                completed_at,
            } => Some(Self::from_snapshot(reference.as_str(), snapshot, *completed_at)),
            SubmissionOutcome::Failure { .. } => None,
        }
    }
}
