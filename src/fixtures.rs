//! Fixtures
//!
//! A built-in demo catalog, and loading of host-defined catalogs from YAML
//! files of the form:
//!
//! ```yaml
//! currency: USD
//! products:
//!   "1": { title: "CyberStrike: Neon Wars", price: "24.99 USD" }
//! ```

use std::{fs, path::Path};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    catalog::{Catalog, CatalogError},
    products::{Product, ProductId},
};

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

    /// Invalid product id
    #[error("Invalid product id: {0}")]
    InvalidProductId(String),

    /// Catalog construction error
    #[error("Failed to build catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Wrapper for a catalog in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Catalog currency code (e.g., "USD")
    pub currency: String,

    /// Map of product id -> product fixture
    pub products: FxHashMap<String, ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product title
    pub title: String,

    /// Product price (e.g., "24.99 USD")
    pub price: String,
}

/// The built-in demo catalog: four products priced in US dollars.
///
/// # Errors
///
/// Returns a [`CatalogError`] if the catalog cannot be built; with this
/// fixed product set that does not happen in practice.
pub fn demo_catalog() -> Result<Catalog, CatalogError> {
    Catalog::with_products(
        [
            (
                ProductId::new(1),
                Product::new("CyberStrike: Neon Wars", Money::from_minor(2499, USD)),
            ),
            (
                ProductId::new(2),
                Product::new("Mystic Quest: Origins", Money::from_minor(1999, USD)),
            ),
            (
                ProductId::new(3),
                Product::new("ProGamers Headset X1", Money::from_minor(1499, USD)),
            ),
            (
                ProductId::new(4),
                Product::new("SpeedPad Controller", Money::from_minor(999, USD)),
            ),
        ],
        USD,
    )
}

/// Load a catalog from a YAML fixture file.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the file cannot be read or parsed, or if
/// the resulting catalog is invalid.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, FixtureError> {
    let contents = fs::read_to_string(path)?;

    parse_catalog(&contents)
}

/// Parse a catalog from YAML fixture contents.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the YAML is malformed, a product id or
/// price does not parse, or the resulting catalog is invalid.
pub fn parse_catalog(yaml: &str) -> Result<Catalog, FixtureError> {
    let fixture: CatalogFixture = serde_norway::from_str(yaml)?;
    let currency = parse_currency(&fixture.currency)?;

    let mut products = Vec::with_capacity(fixture.products.len());

    for (raw_id, product) in fixture.products {
        let id = raw_id
            .parse::<ProductId>()
            .map_err(|_err| FixtureError::InvalidProductId(raw_id.clone()))?;

        let (minor_units, price_currency) = parse_price(&product.price)?;

        products.push((
            id,
            Product::new(product.title, Money::from_minor(minor_units, price_currency)),
        ));
    }

    Ok(Catalog::with_products(products, currency)?)
}

/// Parse price string (e.g., "2.99 GBP") into minor units and currency
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

    parse_currency(currency_code).map(|currency| (minor_units, currency))
}

fn parse_currency(code: &str) -> Result<&'static Currency, FixtureError> {
    match code {
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        other => Err(FixtureError::UnknownCurrency(other.to_string())),
    }
}
