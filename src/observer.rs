//! Observer
//!
//! The store does not know about count badges, rendered views, or how the
//! host surfaces cross-context change signals. It only emits notifications
//! through [`CartObserver`]; the host wires those into whatever display it
//! has, and forwards platform change signals back into the store.

use std::time::Duration;

use crate::{cart::Cart, products::ProductId};

/// How long a transient confirmation stays visible before self-dismissing.
pub const NOTICE_DURATION: Duration = Duration::from_millis(1300);

/// What changed about the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartChange {
    /// Units of a product were added (the delta, after clamping).
    ItemAdded {
        /// Product that was added.
        product_id: ProductId,
        /// Number of units added.
        quantity: u32,
    },

    /// A product's line was removed (also emitted when the id was absent).
    ItemRemoved {
        /// Product that was removed.
        product_id: ProductId,
    },

    /// The persisted cart was deleted entirely.
    Cleared,

    /// The cart was re-read from storage, on startup or after an external
    /// change in another context.
    Reloaded,
}

/// A transient, user-visible confirmation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    text: String,
    duration: Duration,
}

impl Notice {
    /// Creates a notice with the standard display duration.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            duration: NOTICE_DURATION,
        }
    }

    /// The message to display.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// How long to keep the message visible.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

/// Observer of cart mutations.
///
/// Every registered observer sees every change, so any number of count
/// displays and at most one rendered cart view all refresh together.
pub trait CartObserver {
    /// Called after every mutation or reload with the resulting cart state.
    fn cart_changed(&mut self, cart: &Cart, change: &CartChange);

    /// Called when a transient confirmation should be shown. Observers
    /// without a place to put one simply ignore it.
    fn notice(&mut self, _notice: &Notice) {}
}
