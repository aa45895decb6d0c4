//! Render layer: askama templates over view models.
//!
//! Every template renders its region from scratch, so rendering the same
//! state twice yields the same markup.

pub mod views;

use askama::Template;
use askama_web::WebTemplate;

use crate::shop::Shop;

pub use views::{CartItemView, CartView, LineView, OrderSummaryView, OrderView, ProductView};

/// Full storefront page.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub products: Vec<ProductView>,
    pub cart: CartView,
    pub count: usize,
    pub orders: Vec<OrderView>,
    /// How long a notification stays visible, in milliseconds.
    pub toast_ms: u128,
}

impl IndexTemplate {
    /// Project the whole shop into the page.
    #[must_use]
    pub fn new(shop: &Shop, toast_ms: u128) -> Self {
        let cart = CartView::from(shop.cart());
        Self {
            products: product_views(shop),
            count: cart.count,
            cart,
            orders: order_views(shop),
            toast_ms,
        }
    }
}

/// Product grid fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_grid.html")]
pub struct ProductGridTemplate {
    pub products: Vec<ProductView>,
}

impl From<&Shop> for ProductGridTemplate {
    fn from(shop: &Shop) -> Self {
        Self {
            products: product_views(shop),
        }
    }
}

/// Cart items fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

impl From<&Shop> for CartItemsTemplate {
    fn from(shop: &Shop) -> Self {
        Self {
            cart: CartView::from(shop.cart()),
        }
    }
}

/// Cart count badge fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: usize,
}

impl From<&Shop> for CartCountTemplate {
    fn from(shop: &Shop) -> Self {
        Self {
            count: shop.cart().len(),
        }
    }
}

/// Order summary shown in the checkout view.
#[derive(Template, WebTemplate)]
#[template(path = "partials/checkout_summary.html")]
pub struct CheckoutSummaryTemplate {
    pub summary: OrderSummaryView,
}

/// Confirmation shown once an order is placed.
#[derive(Template, WebTemplate)]
#[template(path = "partials/checkout_complete.html")]
pub struct CheckoutCompleteTemplate {
    pub order: OrderView,
}

/// Order history fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/orders.html")]
pub struct OrdersTemplate {
    pub orders: Vec<OrderView>,
}

impl From<&Shop> for OrdersTemplate {
    fn from(shop: &Shop) -> Self {
        Self {
            orders: order_views(shop),
        }
    }
}

fn product_views(shop: &Shop) -> Vec<ProductView> {
    shop.catalog().list().iter().map(ProductView::from).collect()
}

fn order_views(shop: &Shop) -> Vec<OrderView> {
    shop.orders().orders().iter().map(OrderView::from).collect()
}
