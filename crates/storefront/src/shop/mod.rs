//! Shop state: catalog, cart, order history and the checkout flow.
//!
//! [`Shop`] owns all four stores and is the only thing route handlers
//! mutate. Each method is one user action; the caller re-renders whichever
//! view regions the action touches.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod order_log;

use std::sync::Arc;

use chrono::{DateTime, Utc};

use ninetysix_core::{CartItem, Customer, Order, OrderId, Price, Product, ProductId, ProductImage};

use crate::storage::{KeyValueStore, StorageError};

pub use cart::Cart;
pub use catalog::Catalog;
pub use checkout::{CheckoutFlow, CheckoutState, OrderSummary, PendingOrder, SummaryLine};
pub use order_log::{Confirmation, ORDERS_KEY, OrderLog};

/// Errors from shop actions.
///
/// None of these are fatal; each maps to a notification for the user.
#[derive(Debug, thiserror::Error)]
pub enum ShopError {
    /// Cart add referenced a product the catalog does not have.
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    /// Checkout was attempted with nothing in the cart.
    #[error("cart is empty")]
    EmptyCart,

    /// A checkout submission is already waiting to complete.
    #[error("a checkout submission is already in flight")]
    SubmissionInFlight,

    /// Completion was attempted for a submission that is no longer pending.
    #[error("submission {0} is not pending")]
    StaleSubmission(OrderId),

    /// Order history could not be persisted.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ShopError {
    /// Message shown on the notification surface.
    #[must_use]
    pub const fn notification(&self) -> &'static str {
        match self {
            Self::ProductNotFound(_) => "Product not found",
            Self::EmptyCart => "Cart is empty!",
            Self::SubmissionInFlight => "Your order is already being placed",
            Self::StaleSubmission(_) => "Checkout expired, please try again",
            Self::Storage(_) => "Could not save order history",
        }
    }
}

/// All storefront state.
#[derive(Debug)]
pub struct Shop {
    catalog: Catalog,
    cart: Cart,
    orders: OrderLog,
    checkout: CheckoutFlow,
}

impl Shop {
    /// Seed the catalog and load order history from `store`.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_catalog(Catalog::seeded(), store)
    }

    /// Start with `catalog` and load order history from `store`.
    pub fn with_catalog(catalog: Catalog, store: Arc<dyn KeyValueStore>) -> Self {
        let orders = OrderLog::load(store);
        let checkout = CheckoutFlow::starting_after(orders.latest_id_millis().unwrap_or(0));
        Self {
            catalog,
            cart: Cart::new(),
            orders,
            checkout,
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn orders(&self) -> &OrderLog {
        &self.orders
    }

    #[must_use]
    pub const fn checkout(&self) -> &CheckoutFlow {
        &self.checkout
    }

    /// Add an uploaded product to the front of the catalog.
    pub fn upload_product(
        &mut self,
        name: String,
        price: Price,
        image: Option<ProductImage>,
        now: DateTime<Utc>,
    ) -> &Product {
        let product = self.catalog.add(name, price, image, now);
        tracing::info!(
            product_id = %product.id,
            name = %product.name,
            price = %product.price,
            has_image = product.image.is_some(),
            "product uploaded"
        );
        product
    }

    /// Put a copy of product `id` at the end of the cart.
    ///
    /// # Errors
    ///
    /// Returns `ShopError::ProductNotFound` if the catalog has no such
    /// product; the cart is unchanged.
    pub fn add_to_cart(&mut self, id: ProductId) -> Result<&Product, ShopError> {
        let Some(product) = self.catalog.find(id) else {
            tracing::warn!(product_id = %id, "cart add for unknown product");
            return Err(ShopError::ProductNotFound(id));
        };
        self.cart.add(product);
        tracing::debug!(product_id = %id, lines = self.cart.len(), "added to cart");
        Ok(product)
    }

    /// Remove the cart line at `position`; out of range does nothing.
    pub fn remove_from_cart(&mut self, position: usize) -> Option<CartItem> {
        let removed = self.cart.remove_at(position);
        match &removed {
            Some(item) => {
                tracing::debug!(position, product_id = %item.id, lines = self.cart.len(), "removed from cart");
            }
            None => tracing::debug!(position, lines = self.cart.len(), "cart removal out of range"),
        }
        removed
    }

    /// Open checkout and summarise the cart.
    ///
    /// # Errors
    ///
    /// See [`CheckoutFlow::open`].
    pub fn open_checkout(&mut self) -> Result<OrderSummary, ShopError> {
        self.checkout.open(&self.cart)
    }

    /// Submit checkout for `customer`, starting the simulated round trip.
    ///
    /// # Errors
    ///
    /// See [`CheckoutFlow::submit`].
    pub fn submit_checkout(
        &mut self,
        customer: Customer,
        now: DateTime<Utc>,
    ) -> Result<PendingOrder, ShopError> {
        let pending = self.checkout.submit(&self.cart, customer, now).inspect_err(|e| {
            tracing::warn!(error = %e, "checkout submission refused");
        })?;
        tracing::info!(
            order_id = %pending.order().id,
            items = pending.order().item_count(),
            total = %pending.order().total,
            "checkout submitted"
        );
        Ok(pending)
    }

    /// Complete a submission: record the order and empty the cart.
    ///
    /// # Errors
    ///
    /// See [`CheckoutFlow::complete`].
    pub fn complete_checkout(&mut self, pending: PendingOrder) -> Result<Order, ShopError> {
        let order = self
            .checkout
            .complete(pending, &mut self.cart, &mut self.orders)?;
        tracing::info!(order_id = %order.id, orders = self.orders.len(), "order placed");
        Ok(order)
    }

    /// Close the checkout view.
    pub fn dismiss_checkout(&mut self) {
        self.checkout.dismiss();
    }

    /// Clear all order history if the user confirmed.
    ///
    /// Returns whether anything was cleared.
    ///
    /// # Errors
    ///
    /// Returns `ShopError::Storage` if the stored history cannot be removed.
    pub fn clear_orders(&mut self, confirmation: Confirmation) -> Result<bool, ShopError> {
        let cleared = self.orders.clear_all(confirmation)?;
        if cleared {
            tracing::info!("order history cleared");
        }
        Ok(cleared)
    }
}
