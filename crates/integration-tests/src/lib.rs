//! Integration tests for Ninety-Six.
//!
//! The storefront router is driven in-process with `tower::ServiceExt`, so
//! no server or network is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p ninetysix-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `checkout_flow` - Cart to order, persistence and concurrent submission
//! - `storefront_routes` - Uploads, cart fragments and notifications

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use ninetysix_storefront::config::StorefrontConfig;
use ninetysix_storefront::notify::{HX_TRIGGER, SHOW_TOAST};
use ninetysix_storefront::routes;
use ninetysix_storefront::shop::Shop;
use ninetysix_storefront::state::AppState;
use ninetysix_storefront::storage::{KeyValueStore, MemoryStore};
use serde_json::Value;
use tower::ServiceExt;

/// Boundary used by [`MultipartBody`].
pub const BOUNDARY: &str = "ninetysix-test-boundary";

/// A storefront router over a known store.
#[derive(Clone)]
pub struct TestApp {
    router: Router,
    store: Arc<dyn KeyValueStore>,
}

impl TestApp {
    /// App over an empty in-memory store with no checkout delay.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()), Duration::ZERO)
    }

    /// App over `store` with the given checkout delay.
    #[must_use]
    pub fn with_store(store: Arc<dyn KeyValueStore>, checkout_latency: Duration) -> Self {
        let config = StorefrontConfig {
            checkout_latency,
            ..StorefrontConfig::default()
        };
        let shop = Shop::load(Arc::clone(&store));
        Self {
            router: routes::app(AppState::new(config, shop)),
            store,
        }
    }

    /// The store the app persists into.
    #[must_use]
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Send a request and collect the response.
    ///
    /// # Panics
    ///
    /// Panics if the router fails or the body is not UTF-8.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let trigger = response
            .headers()
            .get(HX_TRIGGER)
            .map(|v| serde_json::from_str(v.to_str().expect("ASCII header")).expect("JSON trigger"));
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        TestResponse {
            status,
            trigger,
            body: String::from_utf8(bytes.to_vec()).expect("UTF-8 body"),
        }
    }

    /// `GET uri`.
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::get(uri).body(Body::empty()).expect("valid request"))
            .await
    }

    /// `POST uri` with a URL-encoded form body.
    pub async fn post_form(&self, uri: &str, body: &str) -> TestResponse {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .expect("valid request");
        self.send(request).await
    }

    /// `POST uri` with a multipart body.
    pub async fn post_multipart(&self, uri: &str, body: MultipartBody) -> TestResponse {
        let request = Request::post(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body.finish()))
            .expect("valid request");
        self.send(request).await
    }

    /// Stored order history, parsed.
    ///
    /// # Panics
    ///
    /// Panics if the store fails or holds malformed JSON.
    #[must_use]
    pub fn stored_orders(&self) -> Option<Vec<ninetysix_core::Order>> {
        self.store
            .get(ninetysix_storefront::shop::ORDERS_KEY)
            .expect("readable store")
            .map(|raw| serde_json::from_str(&raw).expect("valid order JSON"))
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// A collected response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    /// Parsed `HX-Trigger` header, if any.
    pub trigger: Option<Value>,
    pub body: String,
}

impl TestResponse {
    /// The notification message, if the response shows one.
    #[must_use]
    pub fn toast(&self) -> Option<&str> {
        self.trigger.as_ref()?.get(SHOW_TOAST)?.as_str()
    }

    /// Whether the response fires client event `name`.
    #[must_use]
    pub fn fires(&self, name: &str) -> bool {
        self.trigger
            .as_ref()
            .is_some_and(|events| events.get(name).is_some())
    }
}

/// Hand-built `multipart/form-data` body.
#[derive(Debug, Default)]
pub struct MultipartBody {
    bytes: Vec<u8>,
}

impl MultipartBody {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text field.
    #[must_use]
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.bytes.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    /// Add a file field.
    #[must_use]
    pub fn file(mut self, name: &str, filename: &str, content_type: &str, data: &[u8]) -> Self {
        self.bytes.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.bytes.extend_from_slice(data);
        self.bytes.extend_from_slice(b"\r\n");
        self
    }

    fn finish(mut self) -> Vec<u8> {
        self.bytes
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.bytes
    }
}
