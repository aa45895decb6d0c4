//! Order history route handlers.

use axum::{Form, extract::State, response::IntoResponse};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::notify::{HxTrigger, ORDERS_UPDATED};
use crate::render::OrdersTemplate;
use crate::shop::Confirmation;
use crate::state::AppState;

/// Clear history form data.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClearOrdersForm {
    /// `yes` once the user accepted the confirmation prompt.
    pub confirm: String,
}

/// Order history fragment (HTMX).
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let shop = state.shop().await;
    OrdersTemplate::from(&*shop)
}

/// Clear all order history (HTMX).
///
/// Without `confirm=yes` nothing is removed and the history re-renders as is.
#[instrument(skip(state))]
pub async fn clear(
    State(state): State<AppState>,
    Form(form): Form<ClearOrdersForm>,
) -> Result<impl IntoResponse> {
    let mut shop = state.shop().await;
    let cleared = shop.clear_orders(Confirmation::from_answer(&form.confirm))?;

    let trigger = if cleared {
        HxTrigger::new()
            .with_event(ORDERS_UPDATED)
            .with_toast("Order history cleared!")
    } else {
        HxTrigger::new()
    };
    Ok((trigger, OrdersTemplate::from(&*shop)))
}
