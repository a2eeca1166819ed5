//! Cart

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    items::LineItem,
    observers::{CartObserver, NoopObserver},
    pricing::{TotalPriceError, total_price, total_quantity},
    products::{Catalog, Product, ProductKey},
};

/// Errors related to cart mutation.
///
/// Every error leaves the cart unchanged; a refused mutation is never partial.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The product key does not resolve in the catalog.
    #[error("Product not found in catalog")]
    UnknownProduct(ProductKey),

    /// The product's price is negative (sku).
    #[error("Product {0} has a negative price")]
    NegativePrice(String),

    /// The product's currency differs from the cart currency (sku, product currency, cart currency).
    #[error("Product {0} has currency {1}, but cart has currency {2}")]
    CurrencyMismatch(String, &'static str, &'static str),

    /// The product is not currently purchasable (sku).
    #[error("Product {0} is out of stock")]
    OutOfStock(String),
}

/// Cart
///
/// An ordered sequence of [`LineItem`]s with at most one line per product.
/// Adding an already-present product increases its quantity rather than
/// creating a duplicate line; insertion order is preserved for display.
///
/// The cart stores product keys only. Totals are recomputed from the live
/// catalog on every call, so a catalog price change is reflected immediately
/// rather than frozen at add time.
#[derive(Debug)]
pub struct Cart {
    lines: Vec<LineItem>,
    currency: &'static Currency,
}

impl Cart {
    /// Create a new empty cart in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            lines: Vec::new(),
            currency,
        }
    }

    /// Add `quantity` units of a product to the cart.
    ///
    /// If a line for the product already exists its quantity is incremented,
    /// otherwise a new line is appended. A zero quantity is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the product key is unknown, the price is
    /// negative, the currency differs from the cart currency, or the product
    /// is out of stock. The cart is left unchanged on error.
    pub fn add(
        &mut self,
        catalog: &Catalog<'_>,
        product: ProductKey,
        quantity: u32,
    ) -> Result<(), CartError> {
        self.add_with_observer(catalog, product, quantity, &mut NoopObserver)
    }

    /// [`Cart::add`], notifying the given observer on mutation.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] as [`Cart::add`] does.
    pub fn add_with_observer(
        &mut self,
        catalog: &Catalog<'_>,
        product: ProductKey,
        quantity: u32,
        observer: &mut impl CartObserver,
    ) -> Result<(), CartError> {
        if quantity == 0 {
            return Ok(());
        }

        self.validate(catalog, product)?;

        if let Some(line) = self.lines.iter_mut().find(|line| line.product() == product) {
            line.add_quantity(quantity);
            observer.on_quantity_changed(product, line.quantity());
        } else {
            self.lines.push(LineItem::new(product, quantity));
            observer.on_line_added(product, quantity);
        }

        Ok(())
    }

    /// Remove the line for a product. Silent no-op for an absent key.
    pub fn remove(&mut self, product: ProductKey) {
        self.remove_with_observer(product, &mut NoopObserver);
    }

    /// [`Cart::remove`], notifying the given observer when a line is removed.
    pub fn remove_with_observer(&mut self, product: ProductKey, observer: &mut impl CartObserver) {
        if let Some(position) = self.lines.iter().position(|line| line.product() == product) {
            self.lines.remove(position);
            observer.on_line_removed(product);
        }
    }

    /// Set the quantity of an existing line (replace, not increment).
    ///
    /// A zero quantity removes the line. No-op for an absent key.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the product reference fails validation; the
    /// cart is left unchanged on error.
    pub fn set_quantity(
        &mut self,
        catalog: &Catalog<'_>,
        product: ProductKey,
        quantity: u32,
    ) -> Result<(), CartError> {
        self.set_quantity_with_observer(catalog, product, quantity, &mut NoopObserver)
    }

    /// [`Cart::set_quantity`], notifying the given observer on mutation.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] as [`Cart::set_quantity`] does.
    pub fn set_quantity_with_observer(
        &mut self,
        catalog: &Catalog<'_>,
        product: ProductKey,
        quantity: u32,
        observer: &mut impl CartObserver,
    ) -> Result<(), CartError> {
        if quantity == 0 {
            self.remove_with_observer(product, observer);
            return Ok(());
        }

        let Some(position) = self.lines.iter().position(|line| line.product() == product) else {
            return Ok(());
        };

        // Validated against the live catalog even for present lines, so a
        // product pulled from sale cannot grow through this path.
        self.validate(catalog, product)?;

        if let Some(line) = self.lines.get_mut(position)
            && line.quantity() != quantity
        {
            line.set_quantity(quantity);
            observer.on_quantity_changed(product, quantity);
        }

        Ok(())
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.clear_with_observer(&mut NoopObserver);
    }

    /// [`Cart::clear`], notifying the given observer.
    pub fn clear_with_observer(&mut self, observer: &mut impl CartObserver) {
        self.lines.clear();
        observer.on_cleared();
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        total_quantity(&self.lines)
    }

    /// Calculate the cart total from the live catalog prices.
    ///
    /// # Errors
    ///
    /// Returns a [`TotalPriceError`] if a line's product no longer resolves in
    /// the catalog or money arithmetic fails.
    pub fn total_price<'a>(
        &self,
        catalog: &Catalog<'a>,
    ) -> Result<Money<'a, Currency>, TotalPriceError> {
        if self.is_empty() {
            return Ok(Money::from_minor(0, self.currency));
        }

        total_price(&self.lines, catalog)
    }

    /// Get the line for a product, if present.
    #[must_use]
    pub fn line(&self, product: ProductKey) -> Option<&LineItem> {
        self.lines.iter().find(|line| line.product() == product)
    }

    /// Iterate over the lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.lines.iter()
    }

    /// Get the number of lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the currency of the cart.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    fn validate<'c, 'a>(
        &self,
        catalog: &'c Catalog<'a>,
        product: ProductKey,
    ) -> Result<&'c Product<'a>, CartError> {
        let entry = catalog
            .get(product)
            .ok_or(CartError::UnknownProduct(product))?;

        if entry.price.to_minor_units() < 0 {
            return Err(CartError::NegativePrice(entry.sku.clone()));
        }

        let price_currency = entry.price.currency();
        if price_currency != self.currency {
            return Err(CartError::CurrencyMismatch(
                entry.sku.clone(),
                price_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        if !entry.in_stock {
            return Err(CartError::OutOfStock(entry.sku.clone()));
        }

        Ok(entry)
    }
}
