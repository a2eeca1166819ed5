//! Receipt

use std::io;

use thiserror::Error;

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};

use crate::{
    cart::Cart,
    pricing::TotalPriceError,
    products::{Catalog, ProductKey},
};

/// Errors that can occur when rendering a cart summary.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Error calculating the cart total.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),

    /// Error finding a product in the product catalog.
    #[error("Missing product")]
    MissingProduct(ProductKey),

    /// IO error
    #[error("IO error")]
    Io,
}

/// Prints a table rendering of the cart to the given writer.
///
/// One row per line item (index, name, quantity, unit price, line total)
/// followed by item-count and total summary lines. Intended for operator
/// tooling and the demo, not for the checkout channel.
///
/// # Errors
///
/// Returns a [`ReceiptError`] if a product lookup, the total calculation, or
/// writing fails.
pub fn write_summary(
    mut out: impl io::Write,
    cart: &Cart,
    catalog: &Catalog<'_>,
) -> Result<(), ReceiptError> {
    let mut builder = Builder::default();

    builder.push_record(["", "Item", "Qty", "Unit Price", "Line Total"]);

    for (idx, line) in cart.iter().enumerate() {
        let product = catalog
            .get(line.product())
            .ok_or(ReceiptError::MissingProduct(line.product()))?;

        builder.push_record([
            format!("#{:<3}", idx + 1),
            product.name.clone(),
            line.quantity().to_string(),
            format!("{}", product.price),
            format!("{}", line.line_total(&product.price)),
        ]);
    }

    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(2..5), Alignment::right());

    writeln!(out, "\n{table}").map_err(|_err| ReceiptError::Io)?;

    writeln!(out, " Items: {}", cart.total_items()).map_err(|_err| ReceiptError::Io)?;
    writeln!(out, " Total: {}", cart.total_price(catalog)?).map_err(|_err| ReceiptError::Io)?;

    Ok(())
}
