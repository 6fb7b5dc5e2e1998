//! Cart Store
//!
//! The single writer of the persisted cart. Every mutation follows the same
//! cycle: read the persisted state, apply the change, persist, notify
//! observers. No operation here returns an error to the caller; failures
//! degrade to the nearest safe state (an empty cart, a no-op) and are
//! logged for diagnostics only.

use std::fmt;

use tracing::{debug, warn};

use crate::{
    cart::Cart,
    catalog::Catalog,
    observer::{CartChange, CartObserver, Notice},
    products::ProductId,
    records,
    storage::StoragePort,
};

/// Storage key the cart is persisted under unless the host overrides it.
pub const DEFAULT_STORAGE_KEY: &str = "satchel_cart_v1";

/// Confirmation shown after a successful add.
const ADDED_NOTICE: &str = "Added to cart";

/// Owns the canonical persisted cart and keeps all readers consistent with
/// the latest write.
///
/// The storage backend and product catalog are supplied by the host. The
/// store validates adds against the catalog, persists through the backend,
/// and fans every change out to subscribed [`CartObserver`]s. Writes from
/// other execution contexts reach this store only when the host forwards
/// their change signals into [`handle_external_change`](Self::handle_external_change);
/// concurrent writers are last-write-wins.
pub struct CartStore<S: StoragePort> {
    storage: S,
    catalog: Catalog,
    key: String,
    observers: Vec<Box<dyn CartObserver>>,
}

impl<S: StoragePort> CartStore<S> {
    /// Create a store over the given backend and catalog, persisting under
    /// [`DEFAULT_STORAGE_KEY`].
    #[must_use]
    pub fn new(storage: S, catalog: Catalog) -> Self {
        Self::with_key(storage, catalog, DEFAULT_STORAGE_KEY)
    }

    /// Create a store persisting under a custom storage key.
    #[must_use]
    pub fn with_key(storage: S, catalog: Catalog, key: impl Into<String>) -> Self {
        Self {
            storage,
            catalog,
            key: key.into(),
            observers: Vec::new(),
        }
    }

    /// Register an observer. Observers are notified in subscription order.
    pub fn subscribe(&mut self, observer: Box<dyn CartObserver>) {
        self.observers.push(observer);
    }

    /// The catalog this store validates against.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The storage key the cart is persisted under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the persisted cart.
    ///
    /// An absent key, a backend failure, and a malformed blob all read as
    /// the empty cart; the failure is logged and the next successful write
    /// overwrites whatever was stored.
    #[must_use]
    pub fn read(&self) -> Cart {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Cart::new(),
            Err(err) => {
                warn!(key = %self.key, error = %err, "cart storage read failed");
                return Cart::new();
            }
        };

        match records::decode(&raw) {
            Ok(cart) => cart,
            Err(err) => {
                warn!(key = %self.key, error = %err, "persisted cart is malformed; treating as empty");
                Cart::new()
            }
        }
    }

    /// Add `quantity` units of a product (zero clamps to one).
    ///
    /// An id that is not in the catalog makes the whole call a logged
    /// no-op. Otherwise the updated cart is persisted, observers are
    /// notified, and a transient confirmation is emitted.
    pub fn add(&mut self, product_id: ProductId, quantity: u32) {
        if !self.catalog.contains(product_id) {
            warn!(%product_id, "ignoring add for unknown product");
            return;
        }

        let quantity = quantity.max(1);

        let mut cart = self.read();
        cart.add(product_id, quantity);

        self.persist(&cart);
        self.notify_changed(
            &cart,
            &CartChange::ItemAdded {
                product_id,
                quantity,
            },
        );
        self.notify_notice(&Notice::new(ADDED_NOTICE));
    }

    /// Add a single unit of a product.
    pub fn add_one(&mut self, product_id: ProductId) {
        self.add(product_id, 1);
    }

    /// Remove a product's line, if present. An absent id is not an error;
    /// the (unchanged) cart is persisted and observers still refresh.
    pub fn remove(&mut self, product_id: ProductId) {
        let mut cart = self.read();
        cart.remove(product_id);

        self.persist(&cart);
        self.notify_changed(&cart, &CartChange::ItemRemoved { product_id });
    }

    /// Delete the persisted cart entirely.
    ///
    /// Distinct from persisting an empty list, though both read back as the
    /// empty cart.
    pub fn clear(&mut self) {
        if let Err(err) = self.storage.remove(&self.key) {
            warn!(key = %self.key, error = %err, "cart storage remove failed");
        }

        self.notify_changed(&Cart::new(), &CartChange::Cleared);
    }

    /// Re-read the persisted cart and notify observers, e.g. for the
    /// initial render when a context starts up.
    pub fn refresh(&mut self) {
        let cart = self.read();
        self.notify_changed(&cart, &CartChange::Reloaded);
    }

    /// React to a storage change made by another execution context.
    ///
    /// The host forwards its platform's change signal here with the key
    /// that changed; signals for other keys are ignored. Delivery relative
    /// to rapid successive writes is not ordered, so this always re-reads
    /// the full state rather than applying a delta.
    pub fn handle_external_change(&mut self, changed_key: &str) {
        if changed_key != self.key {
            return;
        }

        self.refresh();
    }

    fn persist(&mut self, cart: &Cart) {
        let raw = match records::encode(cart) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to encode cart");
                return;
            }
        };

        if let Err(err) = self.storage.set(&self.key, &raw) {
            warn!(key = %self.key, error = %err, "cart storage write failed");
            return;
        }

        debug!(key = %self.key, lines = cart.len(), "persisted cart");
    }

    fn notify_changed(&mut self, cart: &Cart, change: &CartChange) {
        for observer in &mut self.observers {
            observer.cart_changed(cart, change);
        }
    }

    fn notify_notice(&mut self, notice: &Notice) {
        for observer in &mut self.observers {
            observer.notice(notice);
        }
    }
}

impl<S: StoragePort + fmt::Debug> fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("storage", &self.storage)
            .field("catalog", &self.catalog)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
