//! Products

use std::{fmt, str::FromStr};

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

/// Error returned when a product id string cannot be coerced.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid product id: {0:?}")]
pub struct ParseProductIdError(String);

/// Identifier of a catalog product.
///
/// Ids are positive integers. Host layers usually receive them as string
/// attributes, so [`ProductId`] implements [`FromStr`]; zero and non-numeric
/// input fail to parse.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(u32);

impl ProductId {
    /// Creates a product id from a raw integer.
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw integer value.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ProductId {
    type Err = ParseProductIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .trim()
            .parse::<u32>()
            .map_err(|_err| ParseProductIdError(s.to_string()))?;

        if id == 0 {
            return Err(ParseProductIdError(s.to_string()));
        }

        Ok(Self(id))
    }
}

/// A catalog product: a display title and a unit price in minor units.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product title
    pub title: String,

    /// Product unit price
    pub price: Money<'static, Currency>,
}

impl Product {
    /// Creates a new product with the given title and price.
    #[must_use]
    pub fn new(title: impl Into<String>, price: Money<'static, Currency>) -> Self {
        Self {
            title: title.into(),
            price,
        }
    }
}
