//! Fixtures

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    cart::{Cart, CartError},
    fixtures::{carts::CartFixture, products::ProductsFixture},
    products::{Catalog, Product, ProductKey},
};

pub mod carts;
pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Currency mismatch between products
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No products loaded yet
    #[error("No products loaded yet; currency unknown")]
    NoCurrency,

    /// Cart construction error
    #[error("Failed to build cart: {0}")]
    Cart(#[from] CartError),
}

/// Fixture
///
/// Loads a product catalog and a pre-filled cart from YAML files, for demos
/// and tests.
#[derive(Debug)]
pub struct Fixture<'a> {
    /// Base path for fixture files
    base_path: PathBuf,

    /// The live product catalog built from loaded fixtures
    catalog: Catalog<'a>,

    /// String key -> `ProductKey` mapping for lookups
    product_keys: FxHashMap<String, ProductKey>,

    /// Resolved cart lines, in fixture order
    lines: Vec<(ProductKey, u32)>,

    /// Currency for the fixture set
    currency: Option<&'static rusty_money::iso::Currency>,
}

impl<'a> Fixture<'a> {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            catalog: Catalog::with_key(),
            product_keys: FxHashMap::default(),
            lines: Vec::new(),
            currency: None,
        }
    }

    /// Load products from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or if there are currency mismatches.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: ProductsFixture = serde_norway::from_str(&contents)?;

        for (key, product_fixture) in fixture.products {
            let product: Product<'static> = product_fixture.try_into()?;
            let currency = product.price.currency();

            if let Some(existing_currency) = self.currency {
                if existing_currency != currency {
                    return Err(FixtureError::CurrencyMismatch(
                        existing_currency.iso_alpha_code.to_string(),
                        currency.iso_alpha_code.to_string(),
                    ));
                }
            } else {
                self.currency = Some(currency);
            }

            let product_key = self.catalog.insert(product);

            self.product_keys.insert(key, product_key);
        }

        Ok(self)
    }

    /// Load a cart from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or if a line
    /// references a product that has not been loaded.
    pub fn load_cart(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("carts").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: CartFixture = serde_norway::from_str(&contents)?;

        for line in fixture.lines {
            let product_key = self
                .product_keys
                .get(&line.product)
                .ok_or_else(|| FixtureError::ProductNotFound(line.product.clone()))?;

            self.lines.push((*product_key, line.quantity));
        }

        Ok(self)
    }

    /// Load a complete fixture set (products and a cart with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_products(name)?.load_cart(name)?;

        Ok(fixture)
    }

    /// Get a product by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn product(&self, key: &str) -> Result<&Product<'a>, FixtureError> {
        let product_key = self.product_key(key)?;

        self.catalog
            .get(product_key)
            .ok_or_else(|| FixtureError::ProductNotFound(key.to_string()))
    }

    /// Get a product key by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn product_key(&self, key: &str) -> Result<ProductKey, FixtureError> {
        self.product_keys
            .get(key)
            .copied()
            .ok_or_else(|| FixtureError::ProductNotFound(key.to_string()))
    }

    /// Build a cart from the loaded cart lines
    ///
    /// # Errors
    ///
    /// Returns an error if no products are loaded or a line fails cart
    /// validation.
    pub fn cart(&self) -> Result<Cart, FixtureError> {
        let currency = self.currency.ok_or(FixtureError::NoCurrency)?;

        let mut cart = Cart::new(currency);

        for &(product_key, quantity) in &self.lines {
            cart.add(&self.catalog, product_key, quantity)?;
        }

        Ok(cart)
    }

    /// Get the currency
    ///
    /// # Errors
    ///
    /// Returns an error if no products have been loaded yet.
    pub fn currency(&self) -> Result<&'static rusty_money::iso::Currency, FixtureError> {
        self.currency.ok_or(FixtureError::NoCurrency)
    }

    /// Get the product catalog
    pub fn catalog(&self) -> &Catalog<'a> {
        &self.catalog
    }
}

impl Default for Fixture<'_> {
    fn default() -> Self {
        Self::new()
    }
}
