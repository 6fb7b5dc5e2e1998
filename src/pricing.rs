//! Pricing

use rusty_money::{Money, iso::Currency};

use crate::{
    cart::{Cart, LineItem},
    catalog::Catalog,
};

/// Calculates the total for one cart line: catalog price times quantity.
///
/// A product id with no catalog entry totals zero; a stale id left in a
/// persisted cart after a catalog change must not poison the whole total.
#[must_use]
pub fn line_total(item: &LineItem, catalog: &Catalog) -> Money<'static, Currency> {
    let minor = catalog.get(item.product_id()).map_or(0, |product| {
        product
            .price
            .to_minor_units()
            .saturating_mul(i64::from(item.quantity()))
    });

    Money::from_minor(minor, catalog.currency())
}

/// Calculates the total of the whole cart.
#[must_use]
pub fn cart_total(cart: &Cart, catalog: &Catalog) -> Money<'static, Currency> {
    let minor = cart
        .iter()
        .map(|item| line_total(item, catalog).to_minor_units())
        .fold(0_i64, i64::saturating_add);

    Money::from_minor(minor, catalog.currency())
}
