//! A single cart entry: one selected item and its quantity.

use serde::{Deserialize, Serialize};

/// One record within a [`Cart`](crate::Cart).
///
/// Entries are keyed by `id`; a cart never holds two entries with the same
/// id. The `name` is a display label fixed when the entry is first created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    /// Unique item identifier (caller-supplied or slug-derived).
    pub id: String,
    /// Human-readable display label.
    pub name: String,
    /// Selected quantity. Always at least 1 for an entry present in a cart.
    pub qty: u32,
}

impl CartEntry {
    /// Create a new cart entry.
    pub fn new(id: impl Into<String>, name: impl Into<String>, qty: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            qty,
        }
    }
}
