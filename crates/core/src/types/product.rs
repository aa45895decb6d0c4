//! Catalog products and their images.

use core::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::{Price, ProductId};

/// A sellable item.
///
/// Products are created at seed time or by upload and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub image: Option<ProductImage>,
    #[serde(default, rename = "placeholderClass")]
    pub placeholder: Option<PlaceholderStyle>,
}

/// A product as it sits in the cart: a copy taken when it was selected.
pub type CartItem = Product;

impl Product {
    /// CSS class of the block shown when the product has no image.
    #[must_use]
    pub fn placeholder_class(&self) -> &'static str {
        self.placeholder.unwrap_or_default().css_class()
    }
}

/// An image embedded directly in the page as a `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductImage(String);

impl ProductImage {
    /// Media type used when the upload does not declare one.
    pub const FALLBACK_MIME: &'static str = "application/octet-stream";

    /// Encode raw image bytes as a base64 `data:` URL.
    #[must_use]
    pub fn from_bytes(mime: Option<&str>, bytes: &[u8]) -> Self {
        let mime = mime.filter(|m| !m.is_empty()).unwrap_or(Self::FALLBACK_MIME);
        Self(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
    }

    /// The `data:` URL, usable directly as an `img` source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Styled block rendered in place of a missing product image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PlaceholderStyle {
    #[serde(rename = "solid-1")]
    Solid1,
    #[serde(rename = "solid-2")]
    Solid2,
    #[serde(rename = "solid-3")]
    Solid3,
    #[default]
    #[serde(rename = "gradient-1")]
    Gradient1,
}

impl PlaceholderStyle {
    /// The stylesheet class for this placeholder.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Solid1 => "solid-1",
            Self::Solid2 => "solid-2",
            Self::Solid3 => "solid-3",
            Self::Gradient1 => "gradient-1",
        }
    }
}
