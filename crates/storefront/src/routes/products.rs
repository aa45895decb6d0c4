//! Product route handlers.
//!
//! Uploads arrive as `multipart/form-data` with `name`, `price` and `image`
//! parts. The image is inlined as a `data:` URL before the product exists.

use axum::{
    extract::{Multipart, State, multipart::MultipartError},
    response::IntoResponse,
};
use chrono::Utc;
use tracing::instrument;

use ninetysix_core::{Price, ProductImage};

use crate::error::{AppError, Result, add_breadcrumb};
use crate::notify::HxTrigger;
use crate::render::ProductGridTemplate;
use crate::state::AppState;

/// Fields collected from an upload form.
#[derive(Debug, Default)]
struct UploadForm {
    name: String,
    price: Price,
    image: Option<ProductImage>,
}

impl UploadForm {
    async fn read(mut multipart: Multipart) -> std::result::Result<Self, MultipartError> {
        let mut form = Self::default();
        while let Some(field) = multipart.next_field().await? {
            match field.name() {
                Some("name") => form.name = field.text().await?,
                Some("price") => form.price = Price::parse_lenient(&field.text().await?),
                Some("image") => {
                    let mime = field.content_type().map(str::to_owned);
                    let bytes = field.bytes().await?;
                    // Browsers send an empty part when no file was picked
                    if !bytes.is_empty() {
                        form.image = Some(ProductImage::from_bytes(mime.as_deref(), &bytes));
                    }
                }
                _ => {}
            }
        }
        Ok(form)
    }
}

/// Product grid fragment (HTMX).
#[instrument(skip(state))]
pub async fn grid(State(state): State<AppState>) -> impl IntoResponse {
    let shop = state.shop().await;
    ProductGridTemplate::from(&*shop)
}

/// Upload a product and return the re-rendered grid (HTMX).
#[instrument(skip(state, multipart))]
pub async fn upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let form = UploadForm::read(multipart).await.map_err(|e| {
        tracing::warn!(error = %e, "malformed product upload");
        AppError::BadRequest(e.body_text())
    })?;

    let mut shop = state.shop().await;
    let product_id = shop
        .upload_product(form.name, form.price, form.image, Utc::now())
        .id
        .to_string();
    add_breadcrumb(
        "catalog",
        "Uploaded product",
        Some(&[("product_id", product_id.as_str())]),
    );

    Ok((
        HxTrigger::toast("Item Added Successfully"),
        ProductGridTemplate::from(&*shop),
    ))
}
