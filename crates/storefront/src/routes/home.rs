//! Home page route handler.

use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::render::IndexTemplate;
use crate::state::AppState;

/// Display the storefront page with every region rendered.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let toast_ms = state.config().toast_duration.as_millis();
    let shop = state.shop().await;
    IndexTemplate::new(&shop, toast_ms)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
pub async fn health() -> &'static str {
    "ok"
}
