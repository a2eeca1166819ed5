//! Checkout Handoff

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    cart::Cart,
    products::{Catalog, ProductKey},
};

/// Errors that can occur while preparing the checkout handoff.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// A line references a product that no longer resolves in the catalog.
    #[error("Missing product")]
    MissingProduct(ProductKey),

    /// The destination phone number has no digits after normalisation.
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),
}

/// A validated line of the order submission payload.
///
/// This is what the external order service receives; prices are in minor
/// units of the cart currency, captured at handoff time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    /// External product identifier
    pub sku: String,

    /// Units ordered
    pub quantity: u32,

    /// Unit price in minor units at the moment of handoff
    pub unit_price_minor: i64,
}

/// Builds the order submission payload from the cart, in cart order.
///
/// The network call itself belongs to the consuming application; this only
/// guarantees the handed-off lines are internally consistent with the catalog
/// at the moment of the call.
///
/// # Errors
///
/// Returns [`CheckoutError::MissingProduct`] if a line's product key no
/// longer resolves in the catalog.
pub fn order_lines(
    cart: &Cart,
    catalog: &Catalog<'_>,
) -> Result<SmallVec<[OrderLine; 8]>, CheckoutError> {
    cart.iter()
        .map(|line| {
            let product = catalog
                .get(line.product())
                .ok_or(CheckoutError::MissingProduct(line.product()))?;

            Ok(OrderLine {
                sku: product.sku.clone(),
                quantity: line.quantity(),
                unit_price_minor: product.price.to_minor_units(),
            })
        })
        .collect()
}

/// Builds the pre-filled messaging link for the checkout channel.
///
/// The phone number is normalised by stripping spaces, `+`, `-` and
/// parentheses; what remains must be plain digits. The message is
/// percent-encoded into the `text` query parameter. Fire-and-forget: no
/// response from the channel flows back into the cart.
///
/// # Errors
///
/// Returns [`CheckoutError::InvalidPhone`] if no digits remain after
/// normalisation or a non-digit character survives it.
pub fn checkout_url(phone: &str, message: &str) -> Result<String, CheckoutError> {
    let digits: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '+' | '-' | '(' | ')'))
        .collect();

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(CheckoutError::InvalidPhone(phone.to_string()));
    }

    let text = utf8_percent_encode(message, NON_ALPHANUMERIC);

    Ok(format!("https://wa.me/{digits}?text={text}"))
}
