//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Storefront page
//! GET  /health                 - Health check
//!
//! # Products (HTMX fragments)
//! GET  /products               - Product grid
//! POST /products               - Upload product (multipart; returns grid)
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart items
//! POST /cart/add               - Add to cart (returns count badge, triggers cart-updated)
//! POST /cart/remove            - Remove line (returns cart_items fragment)
//! GET  /cart/count             - Cart count badge
//!
//! # Checkout
//! GET  /checkout               - Order summary
//! POST /checkout               - Place order (returns confirmation after the simulated delay)
//! POST /checkout/dismiss       - Close the checkout view
//!
//! # Order history
//! GET  /orders                 - Order history
//! POST /orders/clear           - Clear history (requires confirm=yes)
//! ```

pub mod cart;
pub mod checkout;
pub mod home;
pub mod orders;
pub mod products;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Directory served under `/static`.
pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(products::grid)
            // Images are inlined whatever their size
            .post(products::upload)
            .layer(DefaultBodyLimit::disable()),
    )
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(checkout::summary).post(checkout::submit))
        .route("/dismiss", post(checkout::dismiss))
}

/// Create the order history routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index))
        .route("/clear", post(orders::clear))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(home::health))
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .nest("/checkout", checkout_routes())
        .nest("/orders", order_routes())
}

/// Build the complete application with static files and tracing layers.
pub fn app(state: AppState) -> Router {
    routes()
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}
