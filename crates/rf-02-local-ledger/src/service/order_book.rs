//! # Order Book
//!
//! Completed checkouts: the most recent order, a bounded order history and
//! the preferred payment method.

use super::{exclusive, load, save};
use crate::config::{keys, ORDER_HISTORY_CAPACITY};
use crate::domain::{push_bounded, OrderRecord, StorageError};
use crate::ports::inbound::OutcomeSink;
use crate::ports::outbound::Persistence;
use parking_lot::Mutex;
use serde_json::Value;
use shared_types::{FormSnapshot, PaymentMethod, SubmissionOutcome, Timestamp};
use std::sync::Arc;
use tracing::{debug, info};

pub struct OrderBook {
    store: Arc<dyn Persistence>,
    capacity: usize,
    update_lock: Mutex<()>,
}

impl OrderBook {
    pub fn new(store: Arc<dyn Persistence>) -> Self {
        Self::with_capacity(store, ORDER_HISTORY_CAPACITY)
    }

    pub fn with_capacity(store: Arc<dyn Persistence>, capacity: usize) -> Self {
        Self {
            store,
            capacity,
            update_lock: Mutex::new(()),
        }
    }

    /// Store `order` as the last order, then append it to the history.
    ///
    /// `lastOrder` is written first, so a failure part way never leaves the
    /// history ahead of it. A failed history append leaves `lastOrder`
    /// holding the new order.
    pub fn record_order(&self, order: &OrderRecord) -> Result<(), StorageError> {
        let _guard = self.update_lock.lock();
        let store = self.store.as_ref();
        let history = exclusive(store, || {
            store.set(keys::LAST_ORDER, serde_json::to_value(order)?)?;
            let mut history: Vec<OrderRecord> = load(store, keys::ORDER_HISTORY)?;
            push_bounded(&mut history, order.clone(), self.capacity);
            save(store, keys::ORDER_HISTORY, &history)?;
            Ok(history.len())
        })?;

        info!(
            order_id = %order.order_id,
            method = %order.payment_method,
            history,
            "Order recorded"
        );
        Ok(())
    }

    pub fn last_order(&self) -> Result<Option<OrderRecord>, StorageError> {
        match self.store.get(keys::LAST_ORDER)? {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
        }
    }

    /// Stored orders, oldest first.
    pub fn history(&self) -> Result<Vec<OrderRecord>, StorageError> {
        load(self.store.as_ref(), keys::ORDER_HISTORY)
    }

    pub fn set_preferred_payment(&self, method: PaymentMethod) -> Result<(), StorageError> {
        self.store
            .set(keys::PREFERRED_PAYMENT, Value::String(method.id().to_string()))?;
        debug!(method = %method, "Preferred payment saved");
        Ok(())
    }

    /// Last selected payment method; absent or unrecognised values read as
    /// the default method.
    pub fn preferred_payment(&self) -> Result<PaymentMethod, StorageError> {
        let method = match self.store.get(keys::PREFERRED_PAYMENT)? {
            Some(Value::String(id)) => id.parse().unwrap_or_default(),
            _ => PaymentMethod::default(),
        };
        Ok(method)
    }
}

impl OutcomeSink for OrderBook {
    fn name(&self) -> &str {
        keys::ORDER_HISTORY
    }

    /// Successful checkouts become orders keyed by the outcome reference;
    /// failures leave the book untouched.
    fn record(
        &self,
        snapshot: &FormSnapshot,
        outcome: &SubmissionOutcome,
        _recorded_at: Timestamp,
    ) -> Result<(), StorageError> {
        let Some(order) = OrderRecord::from_outcome(snapshot, outcome) else {
            return Ok(());
        };

        self.record_order(&order)?;
        self.set_preferred_payment(order.payment_method)
    }
}
