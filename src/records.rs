//! Cart Records
//!
//! Wire format for the persisted cart: a JSON array of `{"id": .., "qty": ..}`
//! objects. The field names are part of the stored format and must not change
//! without a new storage key.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{cart::Cart, products::ProductId};

/// Errors that can occur while encoding or decoding the persisted cart.
#[derive(Debug, Error)]
pub enum CartCodecError {
    /// The stored value was not valid JSON of the expected shape.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// One persisted cart line.
#[derive(Debug, Serialize, Deserialize)]
struct LineItemRecord {
    id: u32,
    qty: u32,
}

/// Decode a persisted blob into a [`Cart`].
///
/// Stored lines with a zero quantity are dropped, and lines sharing a
/// product id are merged by summing, so the decoded cart always satisfies
/// the aggregate's invariants. Anything else that is off about the blob is
/// a decode error; callers treat that as "no cart".
///
/// # Errors
///
/// Returns a [`CartCodecError`] if the value is not a JSON array of
/// `{"id", "qty"}` objects with non-negative integer fields.
pub fn decode(raw: &str) -> Result<Cart, CartCodecError> {
    let records: Vec<LineItemRecord> = serde_json::from_str(raw)?;

    let mut cart = Cart::new();

    for record in records {
        if record.qty == 0 {
            continue;
        }

        cart.add(ProductId::new(record.id), record.qty);
    }

    Ok(cart)
}

/// Encode a [`Cart`] into the persisted JSON representation.
///
/// # Errors
///
/// Returns a [`CartCodecError`] if serialization fails.
pub fn encode(cart: &Cart) -> Result<String, CartCodecError> {
    let records: Vec<LineItemRecord> = cart
        .iter()
        .map(|item| LineItemRecord {
            id: item.product_id().value(),
            qty: item.quantity(),
        })
        .collect();

    Ok(serde_json::to_string(&records)?)
}
