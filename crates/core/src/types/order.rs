//! Placed orders and the customer details captured at checkout.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::{CartItem, OrderId, Price};

/// Human-readable layout of [`Order::date`], rendered in local time.
pub const ORDER_DATE_FORMAT: &str = "%d/%m/%Y, %I:%M:%S %p";

/// Customer details exactly as typed into the checkout form.
///
/// None of the fields are validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// A completed checkout.
///
/// Orders are immutable once created. `items` is a deep copy of the cart at
/// submission time, so later cart changes never reach an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: Customer,
    pub items: Vec<CartItem>,
    pub total: Price,
    pub date: String,
}

impl Order {
    /// Snapshot the given cart contents into a new order.
    ///
    /// The id is derived from `id_millis`; the total is the sum of item prices.
    #[must_use]
    pub fn from_cart(
        id_millis: i64,
        customer: Customer,
        items: &[CartItem],
        placed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: OrderId::from_millis(id_millis),
            customer,
            total: items.iter().map(|item| item.price).sum(),
            items: items.to_vec(),
            date: placed_at
                .with_timezone(&Local)
                .format(ORDER_DATE_FORMAT)
                .to_string(),
        }
    }

    /// Number of line items in the order.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
