//! Pricing

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::{
    items::LineItem,
    products::{Catalog, ProductKey},
};

/// Errors that can occur while calculating the total price of a set of lines.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// No lines were provided, so currency could not be determined.
    #[error("no lines provided; cannot determine currency")]
    NoLines,

    /// A line references a product that no longer resolves in the catalog.
    #[error("Missing product")]
    MissingProduct(ProductKey),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculates the total price of a list of cart lines against the live catalog.
///
/// Unit prices are read from the catalog at call time; nothing is cached.
///
/// # Errors
///
/// - [`TotalPriceError::NoLines`]: No lines were provided, so currency could not be determined.
/// - [`TotalPriceError::MissingProduct`]: A line's product key no longer resolves.
/// - [`TotalPriceError::Money`]: Wrapped money arithmetic or currency mismatch error.
pub fn total_price<'a>(
    lines: &[LineItem],
    catalog: &Catalog<'a>,
) -> Result<Money<'a, Currency>, TotalPriceError> {
    let first = lines.first().ok_or(TotalPriceError::NoLines)?;

    let first_product = catalog
        .get(first.product())
        .ok_or(TotalPriceError::MissingProduct(first.product()))?;

    let zero = Money::from_minor(0, first_product.price.currency());

    lines.iter().try_fold(zero, |acc, line| {
        let product = catalog
            .get(line.product())
            .ok_or(TotalPriceError::MissingProduct(line.product()))?;

        acc.add(line.line_total(&product.price))
            .map_err(TotalPriceError::Money)
    })
}

/// Sum of all line quantities.
#[must_use]
pub fn total_quantity(lines: &[LineItem]) -> u64 {
    lines.iter().map(|line| u64::from(line.quantity())).sum()
}
