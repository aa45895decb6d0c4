//! Checkout flow: turns the cart into an order.
//!
//! ```text
//!            open (cart empty) / submit (cart empty)
//!   Idle ───────────────────────────────────────────► Rejected
//!    │ open
//!    ▼
//!   SummaryShown ──submit──► Submitting ──complete──► Completed
//! ```
//!
//! `Submitting` is exclusive: while a submission is pending, both `open`
//! and `submit` are refused. Every other state accepts a new `open` or
//! `submit`, so a form posted without first opening the summary is fine.

use chrono::{DateTime, Utc};

use ninetysix_core::{Customer, IdSequence, Order, OrderId, Price};

use super::ShopError;
use super::cart::Cart;
use super::order_log::OrderLog;

/// Line-item summary shown before the customer submits.
///
/// A display snapshot only; the cart keeps changing independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub lines: Vec<SummaryLine>,
    pub total: Price,
}

/// One line of an [`OrderSummary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub name: String,
    pub price: Price,
}

impl From<&Cart> for OrderSummary {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart
                .items()
                .iter()
                .map(|item| SummaryLine {
                    name: item.name.clone(),
                    price: item.price,
                })
                .collect(),
            total: cart.total(),
        }
    }
}

/// Where the checkout flow currently stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CheckoutState {
    #[default]
    Idle,
    SummaryShown(OrderSummary),
    Submitting { order_id: OrderId },
    Completed { order_id: OrderId },
    Rejected,
}

/// An order built at submission, waiting for the simulated round trip.
///
/// Only [`CheckoutFlow::submit`] creates one, and [`CheckoutFlow::complete`]
/// consumes it.
#[derive(Debug)]
#[must_use = "a pending order must be completed or the checkout stays locked"]
pub struct PendingOrder {
    order: Order,
}

impl PendingOrder {
    /// The order that will be recorded on completion.
    pub const fn order(&self) -> &Order {
        &self.order
    }
}

/// The checkout state machine.
#[derive(Debug, Clone, Default)]
pub struct CheckoutFlow {
    state: CheckoutState,
    ids: IdSequence,
}

impl CheckoutFlow {
    /// A flow in `Idle` whose order ids come after `last_id_millis`.
    #[must_use]
    pub const fn starting_after(last_id_millis: i64) -> Self {
        Self {
            state: CheckoutState::Idle,
            ids: IdSequence::starting_after(last_id_millis),
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// Whether a submission is waiting to complete.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.state, CheckoutState::Submitting { .. })
    }

    /// Open the checkout view and summarise the current cart.
    ///
    /// # Errors
    ///
    /// - `ShopError::SubmissionInFlight` while a submission is pending
    /// - `ShopError::EmptyCart` if there is nothing to check out
    pub fn open(&mut self, cart: &Cart) -> Result<OrderSummary, ShopError> {
        self.ensure_not_submitting()?;
        if cart.is_empty() {
            self.state = CheckoutState::Rejected;
            return Err(ShopError::EmptyCart);
        }
        let summary = OrderSummary::from(cart);
        self.state = CheckoutState::SummaryShown(summary.clone());
        Ok(summary)
    }

    /// Submit the checkout form.
    ///
    /// Builds the order from the cart as it is *now*, which may differ from
    /// the summary that was shown.
    ///
    /// # Errors
    ///
    /// - `ShopError::SubmissionInFlight` while another submission is pending
    /// - `ShopError::EmptyCart` if there is nothing to check out
    pub fn submit(
        &mut self,
        cart: &Cart,
        customer: Customer,
        now: DateTime<Utc>,
    ) -> Result<PendingOrder, ShopError> {
        self.ensure_not_submitting()?;
        if cart.is_empty() {
            self.state = CheckoutState::Rejected;
            return Err(ShopError::EmptyCart);
        }
        let order = Order::from_cart(self.ids.next(now), customer, cart.items(), now);
        self.state = CheckoutState::Submitting {
            order_id: order.id.clone(),
        };
        Ok(PendingOrder { order })
    }

    /// Finish a submission: record the order and empty the cart.
    ///
    /// # Errors
    ///
    /// - `ShopError::StaleSubmission` if `pending` is not the submission in flight
    /// - `ShopError::Storage` if the order history cannot be written; the
    ///   cart is kept and the flow returns to `Idle`
    pub fn complete(
        &mut self,
        pending: PendingOrder,
        cart: &mut Cart,
        log: &mut OrderLog,
    ) -> Result<Order, ShopError> {
        match &self.state {
            CheckoutState::Submitting { order_id } if *order_id == pending.order.id => {}
            _ => return Err(ShopError::StaleSubmission(pending.order.id)),
        }

        let order = pending.order;
        if let Err(e) = log.append(order.clone()) {
            self.state = CheckoutState::Idle;
            return Err(e.into());
        }
        cart.clear();
        self.state = CheckoutState::Completed {
            order_id: order.id.clone(),
        };
        Ok(order)
    }

    /// Close the checkout view. A pending submission is not affected.
    pub fn dismiss(&mut self) {
        if !self.is_submitting() {
            self.state = CheckoutState::Idle;
        }
    }

    fn ensure_not_submitting(&self) -> Result<(), ShopError> {
        if self.is_submitting() {
            Err(ShopError::SubmissionInFlight)
        } else {
            Ok(())
        }
    }
}
