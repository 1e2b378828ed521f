//! The cart: an ordered, id-unique collection of entries.
//!
//! [`Cart`] owns the pure list operations (merge-by-id add, remove,
//! quantity set). Persistence and change notification live in
//! `basket-core`; this type never touches storage.

use serde::{Deserialize, Serialize};

use crate::entry::CartEntry;

/// An ordered sequence of [`CartEntry`], unique by id.
///
/// Insertion order is preserved. Serializes transparently as a bare JSON
/// array of `{id, name, qty}` objects — the persisted wire form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create a new empty cart.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a cart from existing entries.
    ///
    /// The caller is responsible for id uniqueness; deserialized carts come
    /// through this path untouched, mirroring how they were persisted.
    pub fn from_entries(entries: Vec<CartEntry>) -> Self {
        Self { entries }
    }

    /// Look up an entry by id.
    pub fn get(&self, id: &str) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Add `qty` of an item, merging by id.
    ///
    /// If an entry with `id` already exists its quantity is incremented and
    /// its stored name kept — the `name` argument only applies to new
    /// entries, which are appended at the end.
    pub fn add(&mut self, id: &str, name: &str, qty: u32) {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => entry.qty = entry.qty.saturating_add(qty),
            None => self.entries.push(CartEntry::new(id, name, qty)),
        }
    }

    /// Remove the entry with the given id.
    ///
    /// Returns `true` if an entry was removed, `false` if no entry matched.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Set (not increment) the quantity of the entry with the given id.
    ///
    /// A quantity of 0 removes the entry entirely — a cart never retains an
    /// entry at quantity 0. Returns `false` if no entry matched, in which
    /// case the cart is unchanged.
    pub fn set_quantity(&mut self, id: &str, qty: u32) -> bool {
        let Some(pos) = self.entries.iter().position(|e| e.id == id) else {
            return false;
        };
        if qty == 0 {
            self.entries.remove(pos);
        } else {
            self.entries[pos].qty = qty;
        }
        true
    }

    /// Sum of quantities across all entries (the UI badge value).
    pub fn total_quantity(&self) -> u32 {
        self.entries.iter().fold(0u32, |sum, e| sum.saturating_add(e.qty))
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the cart has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartEntry> {
        self.entries.iter()
    }

    /// The entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }
}

impl IntoIterator for Cart {
    type Item = CartEntry;
    type IntoIter = std::vec::IntoIter<CartEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
