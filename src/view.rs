//! View
//!
//! Plain-text rendering of the cart state. The host owns the surfaces these
//! strings land on; rendering here keeps every surface showing the same
//! numbers after each change.

use tabled::{
    builder::Builder,
    settings::{Alignment, Color, Style, object::{Columns, Rows}},
};

use crate::{
    cart::Cart,
    catalog::Catalog,
    pricing::{cart_total, line_total},
};

/// Message rendered in place of the table when the cart has no lines.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty. Browse the store to add items.";

/// Title shown for a line whose product is no longer in the catalog.
const UNKNOWN_TITLE: &str = "(unknown item)";

/// The text for a cart-count badge: the total number of units.
#[must_use]
pub fn count_badge(cart: &Cart) -> String {
    cart.total_quantity().to_string()
}

/// Render the full cart view: one row per line plus a grand total.
///
/// The result replaces the previous view wholesale; there is no partial
/// update. An empty cart renders as [`EMPTY_CART_MESSAGE`].
#[must_use]
pub fn render_cart(cart: &Cart, catalog: &Catalog) -> String {
    if cart.is_empty() {
        return EMPTY_CART_MESSAGE.to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["Item", "Qty", "Line Total"]);

    for item in cart.iter() {
        let title = catalog
            .get(item.product_id())
            .map_or(UNKNOWN_TITLE, |product| product.title.as_str());

        builder.push_record([
            title.to_string(),
            item.quantity().to_string(),
            line_total(item, catalog).to_string(),
        ]);
    }

    builder.push_record([
        "Total".to_string(),
        count_badge(cart),
        cart_total(cart, catalog).to_string(),
    ]);

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(1..3), Alignment::right());

    table.to_string()
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::USD};
    use testresult::TestResult;

    use crate::{
        cart::LineItem,
        catalog::CatalogError,
        products::{Product, ProductId},
    };

    use super::*;

    fn id(raw: u32) -> ProductId {
        ProductId::new(raw)
    }

    fn test_catalog() -> Result<Catalog, CatalogError> {
        Catalog::with_products(
            [
                (id(1), Product::new("Keyboard", Money::from_minor(2499, USD))),
                (id(2), Product::new("Mouse", Money::from_minor(1999, USD))),
            ],
            USD,
        )
    }

    #[test]
    fn count_badge_shows_total_units() {
        let cart = Cart::with_items([LineItem::new(id(1), 2), LineItem::new(id(2), 3)]);

        assert_eq!(count_badge(&cart), "5");
    }

    #[test]
    fn count_badge_for_empty_cart_is_zero() {
        assert_eq!(count_badge(&Cart::new()), "0");
    }

    #[test]
    fn empty_cart_renders_the_empty_message() -> TestResult {
        let catalog = test_catalog()?;

        assert_eq!(render_cart(&Cart::new(), &catalog), EMPTY_CART_MESSAGE);

        Ok(())
    }

    #[test]
    fn rendered_view_contains_titles_and_totals() -> TestResult {
        let catalog = test_catalog()?;
        let cart = Cart::with_items([LineItem::new(id(1), 2), LineItem::new(id(2), 1)]);

        let view = render_cart(&cart, &catalog);

        assert!(view.contains("Keyboard"), "missing first line title");
        assert!(view.contains("Mouse"), "missing second line title");
        assert!(view.contains("$49.98"), "missing first line total");
        assert!(view.contains("$69.97"), "missing grand total");

        Ok(())
    }

    #[test]
    fn stale_ids_render_with_a_placeholder_title() -> TestResult {
        let catalog = test_catalog()?;
        let cart = Cart::with_items([LineItem::new(id(42), 1)]);

        let view = render_cart(&cart, &catalog);

        assert!(view.contains(UNKNOWN_TITLE), "missing placeholder title");
        assert!(view.contains("$0.00"), "stale line should total zero");

        Ok(())
    }
}
