//! Catalog store: the products on sale.

use chrono::{DateTime, Utc};

use ninetysix_core::{IdSequence, PlaceholderStyle, Price, Product, ProductId, ProductImage};

/// The list of sellable products.
///
/// Seeded with the house line; uploads are prepended so the newest item is
/// shown first. Nothing is ever removed.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    ids: IdSequence,
}

impl Catalog {
    /// An empty catalog.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            products: Vec::new(),
            ids: IdSequence::starting_after(0),
        }
    }

    /// A catalog holding the default products.
    #[must_use]
    pub fn seeded() -> Self {
        let products = vec![
            seed(1, "96 Oversized Hoodie", 249_900, PlaceholderStyle::Solid1),
            seed(2, "Utility Cargo Pants", 399_900, PlaceholderStyle::Solid2),
            seed(3, "Signature Tee", 149_900, PlaceholderStyle::Solid3),
        ];
        Self::from_products(products)
    }

    /// A catalog holding exactly `products`, in that order.
    #[must_use]
    pub fn from_products(products: Vec<Product>) -> Self {
        let floor = products.iter().map(|p| p.id.as_i64()).max().unwrap_or(0);
        Self {
            products,
            ids: IdSequence::starting_after(floor),
        }
    }

    /// All products in display order.
    #[must_use]
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look a product up by id.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Create a product and put it at the front of the catalog.
    ///
    /// The name and price are taken as given.
    #[allow(clippy::indexing_slicing)] // index 0 was just inserted
    pub fn add(
        &mut self,
        name: String,
        price: Price,
        image: Option<ProductImage>,
        now: DateTime<Utc>,
    ) -> &Product {
        let product = Product {
            id: ProductId::new(self.ids.next(now)),
            name,
            price,
            image,
            placeholder: None,
        };
        self.products.insert(0, product);
        &self.products[0]
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

fn seed(id: i64, name: &str, paise: i64, style: PlaceholderStyle) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Price::from_paise(paise),
        image: None,
        placeholder: Some(style),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn test_seeded_catalog() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.len(), 3);
        let names: Vec<_> = catalog.list().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            ["96 Oversized Hoodie", "Utility Cargo Pants", "Signature Tee"]
        );
        assert_eq!(
            catalog.find(ProductId::new(2)).unwrap().price,
            Price::from_paise(399_900)
        );
    }

    #[test]
    fn test_find_missing() {
        assert!(Catalog::seeded().find(ProductId::new(99)).is_none());
        assert!(Catalog::empty().is_empty());
    }

    #[test]
    fn test_add_prepends_with_time_id() {
        let mut catalog = Catalog::seeded();
        let id = catalog
            .add("Cap".to_string(), Price::from_paise(99_900), None, at(1_700_000_000_000))
            .id;
        assert_eq!(id, ProductId::new(1_700_000_000_000));
        assert_eq!(catalog.list()[0].name, "Cap");
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.find(id).unwrap().name, "Cap");
    }

    #[test]
    fn test_add_same_instant_gets_distinct_ids() {
        let mut catalog = Catalog::empty();
        let now = at(1_700_000_000_000);
        let first = catalog.add("A".to_string(), Price::ZERO, None, now).id;
        let second = catalog.add("B".to_string(), Price::ZERO, None, now).id;
        assert_ne!(first, second);
        assert_eq!(catalog.list()[0].name, "B");
    }

    #[test]
    fn test_add_accepts_negative_price() {
        let mut catalog = Catalog::empty();
        let product = catalog.add("Refund".to_string(), Price::from_paise(-100), None, at(1));
        assert_eq!(product.price, Price::from_paise(-100));
    }

    #[test]
    fn test_ids_stay_above_seed_ids() {
        let mut catalog = Catalog::seeded();
        let id = catalog.add("Early".to_string(), Price::ZERO, None, at(0)).id;
        assert_eq!(id, ProductId::new(4));
    }
}
