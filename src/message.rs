//! Order Messages

use std::fmt::Write;

use thiserror::Error;

use crate::{
    cart::Cart,
    pricing::TotalPriceError,
    products::{Catalog, ProductKey},
};

/// Errors that can occur when generating an order message.
#[derive(Debug, Error)]
pub enum MessageError {
    /// A line references a product that no longer resolves in the catalog.
    #[error("Missing product")]
    MissingProduct(ProductKey),

    /// Error calculating the cart total.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),

    /// String formatting error.
    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
}

/// Generates the human-readable order summary for the checkout handoff.
///
/// One line per cart item (index, name, quantity, unit price, line subtotal)
/// followed by a grand total. Deterministic given cart and catalog state. An
/// empty cart produces an empty string, which is a defined edge case rather
/// than an error.
///
/// The output is plain text; see [`crate::checkout::checkout_url`] for the
/// URL-encoded form embedded in the messaging link.
///
/// # Errors
///
/// Returns a [`MessageError`] if a product lookup or the total calculation fails.
pub fn order_message(cart: &Cart, catalog: &Catalog<'_>) -> Result<String, MessageError> {
    if cart.is_empty() {
        return Ok(String::new());
    }

    let mut out = String::new();

    for (idx, line) in cart.iter().enumerate() {
        let product = catalog
            .get(line.product())
            .ok_or(MessageError::MissingProduct(line.product()))?;

        writeln!(
            out,
            "{}. {} x{} @ {} = {}",
            idx + 1,
            product.name,
            line.quantity(),
            product.price,
            line.line_total(&product.price),
        )?;
    }

    writeln!(out)?;
    write!(out, "Total: {}", cart.total_price(catalog)?)?;

    Ok(out)
}
