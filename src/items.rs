//! Line Items

use rusty_money::{Money, iso::Currency};

use crate::products::ProductKey;

/// A (product, quantity) pairing inside the cart.
///
/// Quantity is always at least 1; a quantity that would reach 0 removes the
/// line from the cart instead. Lines hold no price of their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineItem {
    product: ProductKey,
    quantity: u32,
}

impl LineItem {
    /// Creates a new line item. Callers guarantee a non-zero quantity.
    pub(crate) fn new(product: ProductKey, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// Returns the product key of the line
    pub fn product(&self) -> ProductKey {
        self.product
    }

    /// Returns the quantity of the line
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Calculates `unit price x quantity` for this line in the price's currency.
    pub fn line_total<'a>(&self, unit_price: &Money<'a, Currency>) -> Money<'a, Currency> {
        Money::from_minor(
            unit_price.to_minor_units() * i64::from(self.quantity),
            unit_price.currency(),
        )
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    pub(crate) fn add_quantity(&mut self, quantity: u32) {
        self.quantity = self.quantity.saturating_add(quantity);
    }
}
