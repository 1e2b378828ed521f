//! Cart change events, carried to the render hook with every notification.
//!
//! The hook always receives the full saved cart; the event says which
//! mutation produced it, so a renderer can react per-mutation (flash an
//! "added" indicator, show a submission confirmation) instead of only
//! redrawing.

/// What changed in the cart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CartEvent {
    /// An item was added (or its quantity incremented by a repeated add).
    ItemAdded { id: String, qty: u32 },
    /// An item was removed.
    ItemRemoved { id: String },
    /// An item's quantity was set outright. A qty of 0 means the entry was
    /// removed by the update.
    QuantitySet { id: String, qty: u32 },
    /// The whole cart was emptied.
    Cleared,
    /// The cart was submitted (simulated) and emptied.
    Submitted,
}

impl std::fmt::Display for CartEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::ItemAdded { .. } => "ItemAdded",
            Self::ItemRemoved { .. } => "ItemRemoved",
            Self::QuantitySet { .. } => "QuantitySet",
            Self::Cleared => "Cleared",
            Self::Submitted => "Submitted",
        };
        write!(f, "{s}")
    }
}
