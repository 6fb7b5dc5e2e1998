//! Cart

use smallvec::SmallVec;

use crate::products::ProductId;

/// One (product, quantity) line within a [`Cart`].
///
/// Quantities are always at least one; a line that would drop to zero is
/// removed from the cart instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LineItem {
    product_id: ProductId,
    quantity: u32,
}

impl LineItem {
    /// Creates a new line item. A zero quantity is clamped to one.
    #[must_use]
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity: quantity.max(1),
        }
    }

    /// Returns the product id of the line.
    #[must_use]
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Returns the quantity of the line.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// The cart aggregate: an ordered sequence of lines, unique by product id.
///
/// This type is pure state. Persistence and catalog validation live in
/// [`CartStore`](crate::store::CartStore).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: SmallVec<[LineItem; 8]>,
}

impl Cart {
    /// Create a new, empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cart from the given lines.
    ///
    /// Lines sharing a product id are merged, summing their quantities, so
    /// the uniqueness invariant holds regardless of input.
    #[must_use]
    pub fn with_items(items: impl IntoIterator<Item = LineItem>) -> Self {
        let mut cart = Self::new();

        for item in items {
            cart.add(item.product_id(), item.quantity());
        }

        cart
    }

    /// Add `quantity` units of a product.
    ///
    /// An existing line for the same product accumulates (saturating);
    /// otherwise a new line is appended, preserving insertion order. A zero
    /// quantity is clamped to one.
    pub fn add(&mut self, product_id: ProductId, quantity: u32) {
        let quantity = quantity.max(1);

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|item| item.product_id == product_id)
        {
            existing.quantity = existing.quantity.saturating_add(quantity);
        } else {
            self.items.push(LineItem::new(product_id, quantity));
        }
    }

    /// Remove the line for the given product, if any.
    ///
    /// Returns whether a line was removed; removing an absent product is a
    /// no-op, not an error.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.product_id != product_id);

        self.items.len() != before
    }

    /// Look up the line for the given product.
    #[must_use]
    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.product_id == product_id)
    }

    /// Total number of units across all lines.
    ///
    /// This is the figure behind the visible cart-count badge.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Iterate over the lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter()
    }

    /// Get the number of lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
