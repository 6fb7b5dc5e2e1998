//! Catalog

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::products::{Product, ProductId};

/// Errors related to catalog construction.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A product's currency differs from the catalog currency (id, product currency, catalog currency).
    #[error("Product {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),

    /// The same product id appeared more than once.
    #[error("Product {0} appears more than once")]
    DuplicateProduct(ProductId),
}

/// Read-only lookup from product id to [`Product`].
///
/// The catalog is supplied by the host and carries a single currency; the
/// cart side only reads it, to validate ids and compute line totals.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: FxHashMap<ProductId, Product>,
    currency: &'static Currency,
}

impl Catalog {
    /// Create an empty catalog with the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Catalog {
            products: FxHashMap::default(),
            currency,
        }
    }

    /// Create a catalog from the given products.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if a product's currency differs from the
    /// catalog currency, or if an id appears more than once.
    pub fn with_products(
        products: impl IntoIterator<Item = (ProductId, Product)>,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        let mut map = FxHashMap::default();

        for (id, product) in products {
            let product_currency = product.price.currency();

            if product_currency != currency {
                return Err(CatalogError::CurrencyMismatch(
                    id,
                    product_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ));
            }

            if map.insert(id, product).is_some() {
                return Err(CatalogError::DuplicateProduct(id));
            }
        }

        Ok(Catalog {
            products: map,
            currency,
        })
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Check whether the catalog contains the given id.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.products.contains_key(&id)
    }

    /// Get the number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Get the currency of the catalog.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
