//! Products

use rusty_money::{Money, iso::Currency};
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// Product catalog, the authoritative owner of product state.
///
/// Cart lines hold [`ProductKey`]s into this map rather than price copies, so
/// totals always reflect the current catalog price.
pub type Catalog<'a> = SlotMap<ProductKey, Product<'a>>;

/// Product
#[derive(Debug, Clone)]
pub struct Product<'a> {
    /// External product identifier, as used by the order submission payload
    pub sku: String,

    /// Product display name
    pub name: String,

    /// Product unit price
    pub price: Money<'a, Currency>,

    /// Whether the product is currently purchasable
    pub in_stock: bool,

    /// Opaque image references for the storefront; never fetched here
    pub images: Vec<String>,
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::GBP;

    use super::*;

    #[test]
    fn catalog_assigns_distinct_keys() {
        let mut catalog = Catalog::with_key();

        let a = catalog.insert(Product {
            sku: "SKU-A".to_string(),
            name: "Alfajor".to_string(),
            price: Money::from_minor(150, GBP),
            in_stock: true,
            images: Vec::new(),
        });

        let b = catalog.insert(Product {
            sku: "SKU-B".to_string(),
            name: "Empanada".to_string(),
            price: Money::from_minor(250, GBP),
            in_stock: true,
            images: Vec::new(),
        });

        assert_ne!(a, b);
        assert_eq!(catalog.get(a).map(|p| p.sku.as_str()), Some("SKU-A"));
    }
}
