//! Display data for templates.
//!
//! Each view is a plain projection of one store. Prices are formatted here
//! so templates never do arithmetic.

use ninetysix_core::{Order, Product};

use crate::shop::{Cart, OrderSummary};

/// Product card display data.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: i64,
    pub name: String,
    pub price: String,
    /// `data:` URL, if the product has an image.
    pub image: Option<String>,
    pub placeholder_class: &'static str,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i64(),
            name: product.name.clone(),
            price: product.price.to_string(),
            image: product.image.as_ref().map(|img| img.as_str().to_string()),
            placeholder_class: product.placeholder_class(),
        }
    }
}

/// Cart line display data.
#[derive(Debug, Clone)]
pub struct CartItemView {
    /// Zero-based position, posted back to remove this line.
    pub index: usize,
    pub name: String,
    pub price: String,
    pub image: Option<String>,
    pub placeholder_class: &'static str,
}

/// Cart display data for templates.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    /// Total amount without the currency symbol.
    pub total: String,
    pub count: usize,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart
                .items()
                .iter()
                .enumerate()
                .map(|(index, item)| CartItemView {
                    index,
                    name: item.name.clone(),
                    price: item.price.to_string(),
                    image: item.image.as_ref().map(|img| img.as_str().to_string()),
                    placeholder_class: item.placeholder_class(),
                })
                .collect(),
            total: cart.total().amount_string(),
            count: cart.len(),
        }
    }
}

/// A name and a formatted price.
#[derive(Debug, Clone)]
pub struct LineView {
    pub name: String,
    pub price: String,
}

/// Checkout summary display data.
#[derive(Debug, Clone)]
pub struct OrderSummaryView {
    pub lines: Vec<LineView>,
    pub total: String,
}

impl From<&OrderSummary> for OrderSummaryView {
    fn from(summary: &OrderSummary) -> Self {
        Self {
            lines: summary
                .lines
                .iter()
                .map(|line| LineView {
                    name: line.name.clone(),
                    price: line.price.to_string(),
                })
                .collect(),
            total: summary.total.to_string(),
        }
    }
}

/// Order history entry display data.
#[derive(Debug, Clone)]
pub struct OrderView {
    pub id: String,
    pub date: String,
    pub customer_name: String,
    pub address: String,
    pub phone: String,
    pub items: Vec<LineView>,
    pub total: String,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.to_string(),
            date: order.date.clone(),
            customer_name: order.customer.name.clone(),
            address: order.customer.address.clone(),
            phone: order.customer.phone.clone(),
            items: order
                .items
                .iter()
                .map(|item| LineView {
                    name: item.name.clone(),
                    price: item.price.to_string(),
                })
                .collect(),
            total: order.total.to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::shop::Catalog;
    use ninetysix_core::ProductId;

    #[test]
    fn test_cart_view_positions_and_total() {
        let catalog = Catalog::seeded();
        let mut cart = Cart::new();
        cart.add(catalog.find(ProductId::new(3)).unwrap());
        cart.add(catalog.find(ProductId::new(3)).unwrap());

        let view = CartView::from(&cart);
        assert_eq!(view.count, 2);
        assert_eq!(view.total, "2998.00");
        assert_eq!(view.items[1].index, 1);
        assert_eq!(view.items[1].price, "₹1499.00");
        assert_eq!(view.items[1].placeholder_class, "solid-3");
    }

    #[test]
    fn test_empty_cart_view() {
        let view = CartView::from(&Cart::new());
        assert!(view.items.is_empty());
        assert_eq!(view.total, "0.00");
    }

    #[test]
    fn test_product_view_placeholder_default() {
        let mut catalog = Catalog::empty();
        let product = catalog.add(
            "Cap".to_string(),
            ninetysix_core::Price::from_paise(50_000),
            None,
            chrono::Utc::now(),
        );
        let view = ProductView::from(product);
        assert_eq!(view.placeholder_class, "gradient-1");
        assert_eq!(view.price, "₹500.00");
        assert!(view.image.is_none());
    }
}
