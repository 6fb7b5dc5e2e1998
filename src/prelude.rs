//! Satchel prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, LineItem},
    catalog::{Catalog, CatalogError},
    observer::{CartChange, CartObserver, NOTICE_DURATION, Notice},
    pricing::{cart_total, line_total},
    products::{ParseProductIdError, Product, ProductId},
    records::CartCodecError,
    storage::{FileStorage, MemoryStorage, StorageError, StoragePort},
    store::{CartStore, DEFAULT_STORAGE_KEY},
    view::{EMPTY_CART_MESSAGE, count_badge, render_cart},
};
