//! Checkout route handlers.
//!
//! Submission is two steps around the simulated round trip: the order is
//! built under the shop lock, the lock is released for the delay, then a
//! spawned task completes the order. The task runs to completion even if
//! the client goes away, so the flow never stays stuck in submitting.

use axum::{Form, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use serde::Deserialize;
use tracing::instrument;

use ninetysix_core::Customer;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::notify::{CART_UPDATED, CHECKOUT_COMPLETED, HxTrigger, ORDERS_UPDATED};
use crate::render::{CheckoutCompleteTemplate, CheckoutSummaryTemplate, OrderSummaryView, OrderView};
use crate::state::AppState;

/// Checkout form data. Fields are free text and never validated.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CheckoutForm {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl From<CheckoutForm> for Customer {
    fn from(form: CheckoutForm) -> Self {
        Self {
            name: form.name,
            address: form.address,
            phone: form.phone,
        }
    }
}

/// Open checkout and show the order summary (HTMX).
#[instrument(skip(state))]
pub async fn summary(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let summary = state.shop().await.open_checkout()?;
    Ok(CheckoutSummaryTemplate {
        summary: OrderSummaryView::from(&summary),
    })
}

/// Submit checkout and wait for the order to be placed (HTMX).
#[instrument(skip(state, form))]
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<CheckoutForm>,
) -> Result<impl IntoResponse> {
    let pending = state
        .shop()
        .await
        .submit_checkout(form.into(), Utc::now())?;
    add_breadcrumb(
        "checkout",
        "Submitted checkout",
        Some(&[("order_id", pending.order().id.as_str())]),
    );

    let latency = state.config().checkout_latency;
    let task_state = state.clone();
    let completion = tokio::spawn(async move {
        tokio::time::sleep(latency).await;
        let mut shop = task_state.shop().await;
        shop.complete_checkout(pending)
    });

    let order = completion
        .await
        .map_err(|e| AppError::Internal(format!("checkout task failed: {e}")))??;

    Ok((
        HxTrigger::new()
            .with_event(CART_UPDATED)
            .with_event(ORDERS_UPDATED)
            .with_event(CHECKOUT_COMPLETED)
            .with_toast("Order Placed Successfully!"),
        CheckoutCompleteTemplate {
            order: OrderView::from(&order),
        },
    ))
}

/// Close the checkout view.
#[instrument(skip(state))]
pub async fn dismiss(State(state): State<AppState>) -> StatusCode {
    state.shop().await.dismiss_checkout();
    StatusCode::NO_CONTENT
}
