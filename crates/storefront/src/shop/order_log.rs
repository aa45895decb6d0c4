//! Order log: completed checkouts, most recent first, mirrored to storage.

use std::fmt;
use std::sync::Arc;

use ninetysix_core::Order;

use crate::storage::{KeyValueStore, StorageError};

/// Storage key holding the serialized order history.
pub const ORDERS_KEY: &str = "orders";

/// Whether the user said yes to a destructive action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl Confirmation {
    /// Interpret a yes/no answer (`y`, `yes`, `true`, `1`, any case).
    #[must_use]
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" | "true" | "1" => Self::Confirmed,
            _ => Self::Declined,
        }
    }
}

/// The order history.
///
/// Every change rewrites the whole sequence under [`ORDERS_KEY`] before the
/// call returns. The in-memory copy only changes once the write succeeded.
pub struct OrderLog {
    orders: Vec<Order>,
    store: Arc<dyn KeyValueStore>,
}

impl fmt::Debug for OrderLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderLog")
            .field("orders", &self.orders.len())
            .finish_non_exhaustive()
    }
}

impl OrderLog {
    /// Load the persisted history.
    ///
    /// A missing key, an unreadable store, or a value that does not parse all
    /// yield an empty log; the cause is logged and never propagated.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let orders = match store.get(ORDERS_KEY) {
            Ok(Some(raw)) => serde_json::from_str::<Vec<Order>>(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "persisted order history is malformed, starting empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read order history, starting empty");
                Vec::new()
            }
        };
        tracing::info!(orders = orders.len(), "order history loaded");
        Self { orders, store }
    }

    /// Orders, most recent first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Number of orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether no orders have been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Record `order` as the most recent and persist the full history.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the history cannot be written; the log is
    /// left unchanged in that case.
    pub fn append(&mut self, order: Order) -> Result<(), StorageError> {
        let mut next = Vec::with_capacity(self.orders.len() + 1);
        next.push(order);
        next.extend(self.orders.iter().cloned());

        let raw = serde_json::to_string(&next)?;
        self.store.set(ORDERS_KEY, &raw)?;
        self.orders = next;
        Ok(())
    }

    /// Forget every order, in memory and in storage.
    ///
    /// Does nothing unless `confirmation` is [`Confirmation::Confirmed`].
    /// Returns whether the history was cleared.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the stored key cannot be removed; the log is
    /// left unchanged in that case.
    pub fn clear_all(&mut self, confirmation: Confirmation) -> Result<bool, StorageError> {
        if confirmation == Confirmation::Declined {
            return Ok(false);
        }
        self.store.remove(ORDERS_KEY)?;
        self.orders.clear();
        Ok(true)
    }

    /// Largest timestamp encoded in a stored order id.
    #[must_use]
    pub fn latest_id_millis(&self) -> Option<i64> {
        self.orders.iter().filter_map(|o| o.id.millis()).max()
    }
}
