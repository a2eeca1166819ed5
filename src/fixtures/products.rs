//! Product Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;

use crate::{fixtures::FixtureError, products::Product};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Map of product key -> product fixture
    pub products: FxHashMap<String, ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product display name
    pub name: String,

    /// External product identifier
    pub sku: String,

    /// Product price (e.g., "2.50 GBP")
    pub price: String,

    /// Stock flag; omitted means purchasable
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,

    /// Image references
    #[serde(default)]
    pub images: Vec<String>,
}

fn default_in_stock() -> bool {
    true
}

impl TryFrom<ProductFixture> for Product<'_> {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;
        let price = Money::from_minor(minor_units, currency);

        Ok(Product {
            sku: fixture.sku,
            name: fixture.name,
            price,
            in_stock: fixture.in_stock,
            images: fixture.images,
        })
    }
}

/// Parse price string (e.g., "2.50 GBP") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency_code = parts
        .get(1)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}
