//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::config::StorefrontConfig;
use crate::shop::Shop;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the single shop every request acts on.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    shop: Mutex<Shop>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `shop` - Shop state, already loaded from storage
    #[must_use]
    pub fn new(config: StorefrontConfig, shop: Shop) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                shop: Mutex::new(shop),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Lock the shop for one action.
    ///
    /// Hold the guard only for the mutation and the render that follows it,
    /// never across an `.await` on anything but the lock itself.
    pub async fn shop(&self) -> MutexGuard<'_, Shop> {
        self.inner.shop.lock().await
    }
}
