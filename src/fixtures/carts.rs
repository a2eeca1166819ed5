//! Cart Fixtures

use serde::Deserialize;

/// Wrapper for a cart in YAML
#[derive(Debug, Deserialize)]
pub struct CartFixture {
    /// Ordered list of cart lines
    pub lines: Vec<CartLineFixture>,
}

/// A single cart line in YAML, referencing a product by its fixture key.
#[derive(Debug, Deserialize)]
pub struct CartLineFixture {
    /// Product fixture key
    pub product: String,

    /// Units to add
    pub quantity: u32,
}
