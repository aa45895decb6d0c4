//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! Every mutation fires `cart-updated` so the badge and the cart panel
//! re-render from the server.

use axum::{Form, extract::State, response::IntoResponse};
use serde::Deserialize;
use tracing::instrument;

use ninetysix_core::ProductId;

use crate::error::{Result, add_breadcrumb};
use crate::notify::{CART_UPDATED, HxTrigger};
use crate::render::{CartCountTemplate, CartItemsTemplate};
use crate::state::AppState;

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    /// Zero-based position of the line.
    pub index: usize,
}

/// Cart items fragment (HTMX).
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let shop = state.shop().await;
    CartItemsTemplate::from(&*shop)
}

/// Add item to cart (HTMX).
///
/// Returns the cart count badge with a trigger to update other elements.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<impl IntoResponse> {
    let mut shop = state.shop().await;
    let product = shop.add_to_cart(ProductId::new(form.product_id))?;
    let message = format!("Added {} to cart", product.name);
    let product_id = form.product_id.to_string();
    add_breadcrumb(
        "cart",
        "Added to cart",
        Some(&[("product_id", product_id.as_str())]),
    );

    Ok((
        HxTrigger::new().with_event(CART_UPDATED).with_toast(message),
        CartCountTemplate::from(&*shop),
    ))
}

/// Remove item from cart (HTMX).
///
/// An index past the end (a stale page) changes nothing.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> impl IntoResponse {
    let mut shop = state.shop().await;
    shop.remove_from_cart(form.index);

    (
        HxTrigger::new().with_event(CART_UPDATED),
        CartItemsTemplate::from(&*shop),
    )
}

/// Get cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    let shop = state.shop().await;
    CartCountTemplate::from(&*shop)
}
