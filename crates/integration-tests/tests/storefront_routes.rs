//! Integration tests for catalog uploads, cart fragments and notifications.
//!
//! Run with: cargo test -p ninetysix-integration-tests

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use ninetysix_integration_tests::{MultipartBody, TestApp};

/// Id of the first product card in a grid fragment.
fn first_product_id(grid: &str) -> &str {
    let start = grid.find("data-id=\"").unwrap() + "data-id=\"".len();
    let len = grid[start..].find('"').unwrap();
    &grid[start..start + len]
}

#[tokio::test]
async fn test_home_page_renders_all_regions() {
    let page = TestApp::new().get("/").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("96 Oversized Hoodie"));
    assert!(page.body.contains("Your cart is empty."));
    assert!(page.body.contains("No orders placed yet."));
    assert!(page.body.contains("data-duration=\"3000\""));
    assert!(page.body.contains("href=\"#shop\""));
}

#[tokio::test]
async fn test_upload_prepends_product_with_image() {
    let app = TestApp::new();
    let body = MultipartBody::new()
        .text("name", "Kurta")
        .text("price", "1299.5")
        .file("image", "kurta.png", "image/png", b"\x89PNG");

    let response = app.post_multipart("/products", body).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.toast(), Some("Item Added Successfully"));

    let grid = response.body;
    let kurta = grid.find("Kurta").unwrap();
    assert!(kurta < grid.find("96 Oversized Hoodie").unwrap());
    assert!(grid.contains("₹1299.50"));
    assert!(grid.contains("data:image/png;base64,iVBORw=="));

    let id = first_product_id(&grid);
    assert_ne!(id, "1");
    let added = app.post_form("/cart/add", &format!("product_id={id}")).await;
    assert_eq!(added.toast(), Some("Added Kurta to cart"));
}

#[tokio::test]
async fn test_upload_without_file_uses_placeholder() {
    let app = TestApp::new();
    let body = MultipartBody::new()
        .text("name", "Beanie")
        .text("price", "abc")
        .file("image", "", "application/octet-stream", b"");

    let response = app.post_multipart("/products", body).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("image-placeholder gradient-1"));
    assert!(response.body.contains("₹0.00"));
}

#[tokio::test]
async fn test_uploads_get_distinct_ids() {
    let app = TestApp::new();
    let first = app
        .post_multipart("/products", MultipartBody::new().text("name", "A").text("price", "1"))
        .await;
    let second = app
        .post_multipart("/products", MultipartBody::new().text("name", "B").text("price", "2"))
        .await;
    assert_ne!(first_product_id(&first.body), first_product_id(&second.body));
}

#[tokio::test]
async fn test_non_ascii_toast() {
    let app = TestApp::new();
    app.post_multipart(
        "/products",
        MultipartBody::new()
            .text("name", "Kurta ₹ Édition")
            .text("price", "999"),
    )
    .await;
    let grid = app.get("/products").await.body;
    let id = first_product_id(&grid).to_string();

    let added = app.post_form("/cart/add", &format!("product_id={id}")).await;
    assert_eq!(added.status, StatusCode::OK);
    assert_eq!(added.toast(), Some("Added Kurta ₹ Édition to cart"));
}

#[tokio::test]
async fn test_unknown_product_leaves_cart_alone() {
    let app = TestApp::new();
    let response = app.post_form("/cart/add", "product_id=424242").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.toast(), Some("Product not found"));
    assert!(app.get("/cart").await.body.contains("Your cart is empty."));
}

#[tokio::test]
async fn test_remove_out_of_range_is_noop() {
    let app = TestApp::new();
    app.post_form("/cart/add", "product_id=2").await;

    let response = app.post_form("/cart/remove", "index=5").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Utility Cargo Pants"));
    assert_eq!(app.get("/cart/count").await.body.trim(), "1");
}

#[tokio::test]
async fn test_duplicate_lines_are_kept() {
    let app = TestApp::new();
    app.post_form("/cart/add", "product_id=3").await;
    let badge = app.post_form("/cart/add", "product_id=3").await;
    assert_eq!(badge.body.trim(), "2");

    let cart = app.get("/cart").await.body;
    assert_eq!(cart.matches("Signature Tee").count(), 2);
    assert!(cart.contains("2998.00"));
}

#[tokio::test]
async fn test_dismiss_checkout() {
    let app = TestApp::new();
    app.post_form("/cart/add", "product_id=1").await;
    app.get("/checkout").await;

    let response = app.post_form("/checkout/dismiss", "").await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
}
