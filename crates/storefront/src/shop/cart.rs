//! Cart store: the items picked for purchase.

use ninetysix_core::{CartItem, Price, Product};

/// Ordered, non-deduplicated list of selected products.
///
/// Display order is insertion order. The same product may appear several
/// times; each occurrence is an independent line removed by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a copy of `product`.
    pub fn add(&mut self, product: &Product) {
        self.items.push(product.clone());
    }

    /// Remove the line at zero-based `position`.
    ///
    /// Out-of-range positions (for example from a stale page) leave the cart
    /// untouched and return `None`.
    pub fn remove_at(&mut self, position: usize) -> Option<CartItem> {
        (position < self.items.len()).then(|| self.items.remove(position))
    }

    /// Sum of the prices of every line; zero when empty.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Lines in display order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of lines, shown on the cart badge.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ninetysix_core::{PlaceholderStyle, ProductId};
    use proptest::prelude::*;

    fn product(id: i64, paise: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::from_paise(paise),
            image: None,
            placeholder: Some(PlaceholderStyle::Solid1),
        }
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::ZERO);
    }

    #[test]
    fn test_add_keeps_order_and_duplicates() {
        let a = product(1, 249_900);
        let b = product(2, 399_900);
        let mut cart = Cart::new();
        cart.add(&a);
        cart.add(&b);
        cart.add(&a);

        let ids: Vec<_> = cart.items().iter().map(|i| i.id.as_i64()).collect();
        assert_eq!(ids, [1, 2, 1]);
        assert_eq!(cart.len(), 3);
        assert_eq!(cart.total(), Price::from_paise(899_700));
    }

    #[test]
    fn test_remove_at_scenario() {
        let a = product(1, 249_900);
        let b = product(2, 399_900);
        let mut cart = Cart::new();
        cart.add(&a);
        cart.add(&b);

        let removed = cart.remove_at(0).unwrap();
        assert_eq!(removed, a);
        assert_eq!(cart.items(), &[b]);
        assert_eq!(cart.total().amount_string(), "3999.00");
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100));
        assert!(cart.remove_at(1).is_none());
        assert!(cart.remove_at(usize::MAX).is_none());
        assert_eq!(cart.len(), 1);

        let mut empty = Cart::new();
        assert!(empty.remove_at(0).is_none());
    }

    #[test]
    fn test_items_are_copies() {
        let mut original = product(1, 100);
        let mut cart = Cart::new();
        cart.add(&original);
        original.name = "Renamed".to_string();
        assert_eq!(cart.items()[0].name, "Product 1");
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100));
        cart.clear();
        assert!(cart.is_empty());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(usize),
        RemoveAt(usize),
    }

    const PRICES: [i64; 3] = [249_900, 399_900, 149_900];

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..PRICES.len()).prop_map(Op::Add),
            // Reaches past the end so stale positions are exercised too
            (0usize..12).prop_map(Op::RemoveAt),
        ]
    }

    proptest! {
        #[test]
        fn prop_total_matches_model(ops in prop::collection::vec(op(), 0..40)) {
            let products: Vec<Product> = PRICES
                .iter()
                .zip(1..)
                .map(|(&paise, id)| product(id, paise))
                .collect();
            let mut cart = Cart::new();
            let mut model: Vec<(i64, i64)> = Vec::new();

            for op in ops {
                match op {
                    Op::Add(n) => {
                        cart.add(&products[n]);
                        model.push((products[n].id.as_i64(), PRICES[n]));
                    }
                    Op::RemoveAt(position) => {
                        let removed = cart.remove_at(position);
                        if position < model.len() {
                            let (id, _) = model.remove(position);
                            prop_assert_eq!(removed.map(|item| item.id.as_i64()), Some(id));
                        } else {
                            prop_assert!(removed.is_none());
                        }
                    }
                }

                let paise: i64 = model.iter().map(|&(_, p)| p).sum();
                prop_assert_eq!(cart.total(), Price::from_paise(paise));
                prop_assert_eq!(cart.len(), model.len());
                let ids: Vec<i64> = cart.items().iter().map(|i| i.id.as_i64()).collect();
                let expected: Vec<i64> = model.iter().map(|&(id, _)| id).collect();
                prop_assert_eq!(ids, expected);
            }
        }
    }
}
