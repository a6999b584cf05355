//! # Form Snapshot Extractor
//!
//! Turns raw input values into an immutable `FormSnapshot`, stamped with
//! the submission time, the originating page and the client identifier.
//! Checkout snapshots are enriched with the payment default and the book
//! details.

use rf_02_local_ledger::domain::order::{BOOK_PRICE, BOOK_TITLE, CURRENCY};
use shared_types::{order_fields, FormKind, FormSnapshot, PaymentMethod, TimeSource};
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Clone)]
pub struct SnapshotExtractor {
    origin_page: String,
    client_context: String,
    clock: Arc<dyn TimeSource>,
}

impl SnapshotExtractor {
    pub fn new(
        origin_page: impl Into<String>,
        client_context: impl Into<String>,
        clock: Arc<dyn TimeSource>,
    ) -> Self {
        Self {
            origin_page: origin_page.into(),
            client_context: client_context.into(),
            clock,
        }
    }

    pub fn clock(&self) -> &Arc<dyn TimeSource> {
        &self.clock
    }

    /// Capture the current values of a form.
    ///
    /// Later duplicates of a field name replace earlier ones.
    pub fn capture<I, K, V>(&self, kind: FormKind, fields: I) -> FormSnapshot
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut values: BTreeMap<String, String> = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        if kind == FormKind::Order {
            enrich_order(&mut values);
        }

        FormSnapshot::capture(
            kind,
            values,
            self.clock.now(),
            self.origin_page.as_str(),
            self.client_context.as_str(),
        )
    }
}

fn enrich_order(values: &mut BTreeMap<String, String>) {
    let method = values
        .entry(order_fields::PAYMENT_METHOD.to_string())
        .or_default();
    if method.trim().is_empty() {
        *method = PaymentMethod::default().id().to_string();
    }

    values.insert(order_fields::BOOK_TITLE.to_string(), BOOK_TITLE.to_string());
    values.insert(order_fields::BOOK_PRICE.to_string(), BOOK_PRICE.to_string());
    values.insert(order_fields::CURRENCY.to_string(), CURRENCY.to_string());
}
