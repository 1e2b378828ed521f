//! The [`CartStore`]: load-transform-save cart state management.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use basket_storage::KeyValueStore;
use basket_types::{coerce_add_qty, coerce_update_qty, Cart, CartEntry};

use crate::config::CartConfig;
use crate::error::CartResult;
use crate::event::CartEvent;
use crate::hooks::{NoOpRenderHook, RenderHook};

/// The outcome of a (simulated) cart submission.
///
/// Captures the cart as it stood at the moment of submission, before it
/// was emptied. No order is placed anywhere — submission is simulated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitSummary {
    /// The submitted entries, in cart order.
    pub entries: Vec<CartEntry>,
    /// Sum of submitted quantities.
    pub total_quantity: u32,
}

/// Sole owner of cart state.
///
/// Every operation re-reads the cart from the injected backend, applies
/// one transformation, and writes the full cart back. The injected
/// [`RenderHook`] fires synchronously after each successful write. The
/// load-save sequence is atomic for a single caller but not across
/// processes sharing the same backing store — last write wins.
pub struct CartStore {
    storage: Arc<dyn KeyValueStore>,
    config: CartConfig,
    render_hook: Arc<dyn RenderHook>,
}

impl CartStore {
    /// Create a store over the given backend with the default config.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self::with_config(storage, CartConfig::default())
    }

    /// Create a store over the given backend with an explicit config.
    pub fn with_config(storage: Arc<dyn KeyValueStore>, config: CartConfig) -> Self {
        Self {
            storage,
            config,
            render_hook: Arc::new(NoOpRenderHook),
        }
    }

    /// Inject the presentation hook invoked after every mutation.
    pub fn set_render_hook(&mut self, hook: Arc<dyn RenderHook>) {
        self.render_hook = hook;
    }

    /// Read the current cart from storage.
    ///
    /// Never fails visibly: an absent key, a corrupt payload, or a failed
    /// storage read all yield an empty cart.
    pub fn load(&self) -> Cart {
        let raw = match self.storage.get(&self.config.storage_key) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key = %self.config.storage_key, error = %e, "cart read failed; starting empty");
                return Cart::new();
            }
        };
        let Some(raw) = raw else {
            return Cart::new();
        };
        match serde_json::from_str(&raw) {
            Ok(cart) => cart,
            Err(e) => {
                warn!(key = %self.config.storage_key, error = %e, "corrupt cart payload; starting empty");
                Cart::new()
            }
        }
    }

    /// The single write path: serialize, persist, notify.
    ///
    /// Serialization of a `Cart` cannot fail (it is a plain array of string
    /// and integer fields), so only storage write errors propagate.
    fn save(&self, cart: &Cart, event: CartEvent) -> CartResult<()> {
        let raw = serde_json::to_string(cart).expect("cart serialization is infallible");
        self.storage.set(&self.config.storage_key, &raw)?;
        self.render_hook.cart_changed(&event, cart);
        Ok(())
    }

    /// Add `qty` of an item, merging by id.
    ///
    /// `qty` is coerced to at least 1. If the id is already in the cart its
    /// quantity is incremented and its stored name kept — `name` only
    /// applies to new entries. A new entry with no (or empty) name is
    /// labeled with its id.
    pub fn add_item(&self, id: &str, name: Option<&str>, qty: i64) -> CartResult<()> {
        let qty = coerce_add_qty(qty);
        let label = match name {
            Some(n) if !n.is_empty() => n,
            _ => id,
        };
        let mut cart = self.load();
        cart.add(id, label, qty);
        debug!(id, qty, "cart add");
        self.save(
            &cart,
            CartEvent::ItemAdded {
                id: id.to_string(),
                qty,
            },
        )
    }

    /// Remove the entry with the given id.
    ///
    /// Removing an absent id still persists and re-renders the (unchanged)
    /// cart, matching the unconditional filter-then-save shape of the
    /// operation.
    pub fn remove_item(&self, id: &str) -> CartResult<()> {
        let mut cart = self.load();
        cart.remove(id);
        debug!(id, "cart remove");
        self.save(&cart, CartEvent::ItemRemoved { id: id.to_string() })
    }

    /// Set (not increment) an entry's quantity.
    ///
    /// `qty` is clamped below at 0; 0 removes the entry. An id not present
    /// in the cart is a true no-op: nothing is persisted and the hook does
    /// not fire.
    pub fn update_quantity(&self, id: &str, qty: i64) -> CartResult<()> {
        let qty = coerce_update_qty(qty);
        let mut cart = self.load();
        if !cart.set_quantity(id, qty) {
            return Ok(());
        }
        debug!(id, qty, "cart quantity set");
        self.save(
            &cart,
            CartEvent::QuantitySet {
                id: id.to_string(),
                qty,
            },
        )
    }

    /// Sum of quantities across all entries (the badge value).
    pub fn count(&self) -> u32 {
        self.load().total_quantity()
    }

    /// Read-only accessor for the current cart, equivalent to [`load`](Self::load).
    pub fn items(&self) -> Cart {
        self.load()
    }

    /// Empty the cart.
    pub fn clear(&self) -> CartResult<()> {
        debug!("cart cleared");
        self.save(&Cart::new(), CartEvent::Cleared)
    }

    /// Simulated submission: capture a summary, then empty the cart.
    ///
    /// Fails with [`CartError::EmptyCart`](crate::CartError::EmptyCart) when
    /// there is nothing to submit; the hook does not fire in that case.
    pub fn submit(&self) -> CartResult<SubmitSummary> {
        let cart = self.load();
        if cart.is_empty() {
            return Err(crate::CartError::EmptyCart);
        }
        let summary = SubmitSummary {
            total_quantity: cart.total_quantity(),
            entries: cart.entries().to_vec(),
        };
        debug!(items = summary.entries.len(), total = summary.total_quantity, "cart submitted");
        self.save(&Cart::new(), CartEvent::Submitted)?;
        Ok(summary)
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("storage_key", &self.config.storage_key)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use basket_storage::{InMemoryKeyValueStore, StorageError, StorageResult};

    use crate::error::CartError;

    fn store() -> CartStore {
        CartStore::new(Arc::new(InMemoryKeyValueStore::new()))
    }

    /// Render hook that records every notification.
    #[derive(Default)]
    struct RecordingHook {
        calls: Mutex<Vec<(CartEvent, Cart)>>,
    }

    impl RecordingHook {
        fn calls(&self) -> Vec<(CartEvent, Cart)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl RenderHook for RecordingHook {
        fn cart_changed(&self, event: &CartEvent, cart: &Cart) {
            self.calls.lock().unwrap().push((event.clone(), cart.clone()));
        }
    }

    /// Backend whose writes always fail.
    struct WriteFailStore;

    impl KeyValueStore for WriteFailStore {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Ok(None)
        }
        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Io(std::io::Error::other("disk full")))
        }
        fn remove(&self, _key: &str) -> StorageResult<bool> {
            Ok(false)
        }
    }

    /// Backend whose reads always fail.
    struct ReadFailStore;

    impl KeyValueStore for ReadFailStore {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Io(std::io::Error::other("read error")))
        }
        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Ok(())
        }
        fn remove(&self, _key: &str) -> StorageResult<bool> {
            Ok(false)
        }
    }

    // -----------------------------------------------------------------------
    // Add
    // -----------------------------------------------------------------------

    #[test]
    fn add_item_appends_new_entry() {
        let store = store();
        store.add_item("a", Some("A"), 2).unwrap();
        let cart = store.items();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get("a").unwrap().qty, 2);
        assert_eq!(cart.get("a").unwrap().name, "A");
    }

    #[test]
    fn add_item_twice_accumulates() {
        let store = store();
        store.add_item("a", Some("A"), 2).unwrap();
        store.add_item("a", Some("A"), 3).unwrap();
        let cart = store.items();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get("a").unwrap().qty, 5);
    }

    #[test]
    fn add_item_keeps_name_from_first_insertion() {
        let store = store();
        store.add_item("a", Some("Original"), 1).unwrap();
        store.add_item("a", Some("Renamed"), 1).unwrap();
        assert_eq!(store.items().get("a").unwrap().name, "Original");
    }

    #[test]
    fn add_item_without_name_uses_id_as_label() {
        let store = store();
        store.add_item("rust-101", None, 1).unwrap();
        assert_eq!(store.items().get("rust-101").unwrap().name, "rust-101");
    }

    #[test]
    fn add_item_empty_name_uses_id_as_label() {
        let store = store();
        store.add_item("a", Some(""), 1).unwrap();
        assert_eq!(store.items().get("a").unwrap().name, "a");
    }

    #[test]
    fn add_item_coerces_invalid_qty_to_one() {
        let store = store();
        store.add_item("a", Some("A"), 0).unwrap();
        store.add_item("b", Some("B"), -7).unwrap();
        assert_eq!(store.items().get("a").unwrap().qty, 1);
        assert_eq!(store.items().get("b").unwrap().qty, 1);
    }

    // -----------------------------------------------------------------------
    // Remove / update
    // -----------------------------------------------------------------------

    #[test]
    fn remove_item_deletes_entry() {
        let store = store();
        store.add_item("a", Some("A"), 1).unwrap();
        store.remove_item("a").unwrap();
        assert!(store.items().is_empty());
    }

    #[test]
    fn remove_item_missing_id_leaves_cart_unchanged() {
        let store = store();
        store.add_item("a", Some("A"), 1).unwrap();
        store.remove_item("x").unwrap();
        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn update_quantity_sets_not_increments() {
        let store = store();
        store.add_item("a", Some("A"), 5).unwrap();
        store.update_quantity("a", 2).unwrap();
        assert_eq!(store.items().get("a").unwrap().qty, 2);
    }

    #[test]
    fn update_quantity_zero_removes_entry() {
        let store = store();
        store.add_item("a", Some("A"), 1).unwrap();
        store.update_quantity("a", 0).unwrap();
        assert!(store.items().is_empty());
    }

    #[test]
    fn update_quantity_negative_removes_entry() {
        let store = store();
        store.add_item("a", Some("A"), 3).unwrap();
        store.update_quantity("a", -4).unwrap();
        assert!(store.items().is_empty());
    }

    #[test]
    fn update_quantity_missing_id_is_noop() {
        let store = store();
        store.update_quantity("x", 5).unwrap();
        assert!(store.items().is_empty());
    }

    // -----------------------------------------------------------------------
    // Count / load
    // -----------------------------------------------------------------------

    #[test]
    fn count_sums_quantities() {
        let store = store();
        store.add_item("a", Some("A"), 2).unwrap();
        store.add_item("b", Some("B"), 3).unwrap();
        assert_eq!(store.count(), 5);
    }

    #[test]
    fn load_from_absent_key_is_empty() {
        assert!(store().load().is_empty());
    }

    #[test]
    fn load_from_corrupt_payload_is_empty_and_store_stays_usable() {
        let backend = Arc::new(InMemoryKeyValueStore::new());
        backend.set("cart_v1", "{definitely not json").unwrap();

        let store = CartStore::new(backend);
        assert!(store.load().is_empty());

        // Subsequent operations behave as on a fresh cart.
        store.add_item("a", Some("A"), 1).unwrap();
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn load_swallows_read_errors() {
        let store = CartStore::new(Arc::new(ReadFailStore));
        assert!(store.load().is_empty());
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn cart_roundtrips_through_storage() {
        let backend = Arc::new(InMemoryKeyValueStore::new());
        let store = CartStore::new(Arc::clone(&backend) as Arc<dyn KeyValueStore>);
        store.add_item("z", Some("Zeta"), 3).unwrap();
        store.add_item("a", Some("Alpha"), 1).unwrap();

        // A second store over the same backend sees the identical cart.
        let other = CartStore::new(backend);
        let cart = other.items();
        let ids: Vec<&str> = cart.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a"]);
        assert_eq!(cart.get("z").unwrap().name, "Zeta");
        assert_eq!(cart.get("z").unwrap().qty, 3);
    }

    #[test]
    fn respects_configured_storage_key() {
        let backend = Arc::new(InMemoryKeyValueStore::new());
        let store = CartStore::with_config(
            Arc::clone(&backend) as Arc<dyn KeyValueStore>,
            CartConfig::with_key("other_key"),
        );
        store.add_item("a", Some("A"), 1).unwrap();
        assert!(backend.get("other_key").unwrap().is_some());
        assert!(backend.get("cart_v1").unwrap().is_none());
    }

    // -----------------------------------------------------------------------
    // Clear / submit
    // -----------------------------------------------------------------------

    #[test]
    fn clear_empties_the_cart() {
        let store = store();
        store.add_item("a", Some("A"), 2).unwrap();
        store.clear().unwrap();
        assert!(store.items().is_empty());
    }

    #[test]
    fn submit_returns_summary_and_empties_cart() {
        let store = store();
        store.add_item("a", Some("A"), 2).unwrap();
        store.add_item("b", Some("B"), 3).unwrap();

        let summary = store.submit().unwrap();
        assert_eq!(summary.total_quantity, 5);
        assert_eq!(summary.entries.len(), 2);
        assert_eq!(summary.entries[0].id, "a");
        assert!(store.items().is_empty());
    }

    #[test]
    fn submit_empty_cart_is_rejected() {
        let store = store();
        let err = store.submit().unwrap_err();
        assert!(matches!(err, CartError::EmptyCart));
    }

    // -----------------------------------------------------------------------
    // Render hook
    // -----------------------------------------------------------------------

    #[test]
    fn hook_fires_once_per_mutation_with_matching_event() {
        let hook = Arc::new(RecordingHook::default());
        let mut store = store();
        store.set_render_hook(Arc::clone(&hook) as Arc<dyn RenderHook>);

        store.add_item("a", Some("A"), 2).unwrap();
        store.update_quantity("a", 4).unwrap();
        store.remove_item("a").unwrap();
        store.clear().unwrap();

        let calls = hook.calls();
        assert_eq!(calls.len(), 4);
        assert_eq!(
            calls[0].0,
            CartEvent::ItemAdded {
                id: "a".into(),
                qty: 2
            }
        );
        assert_eq!(
            calls[1].0,
            CartEvent::QuantitySet {
                id: "a".into(),
                qty: 4
            }
        );
        assert_eq!(calls[2].0, CartEvent::ItemRemoved { id: "a".into() });
        assert_eq!(calls[3].0, CartEvent::Cleared);
    }

    #[test]
    fn hook_receives_the_saved_cart() {
        let hook = Arc::new(RecordingHook::default());
        let mut store = store();
        store.set_render_hook(Arc::clone(&hook) as Arc<dyn RenderHook>);

        store.add_item("a", Some("A"), 2).unwrap();
        let calls = hook.calls();
        assert_eq!(calls[0].1.get("a").unwrap().qty, 2);
    }

    #[test]
    fn hook_does_not_fire_on_missed_update() {
        let hook = Arc::new(RecordingHook::default());
        let mut store = store();
        store.set_render_hook(Arc::clone(&hook) as Arc<dyn RenderHook>);

        store.update_quantity("missing", 5).unwrap();
        assert!(hook.calls().is_empty());
    }

    #[test]
    fn hook_does_not_fire_on_rejected_submit() {
        let hook = Arc::new(RecordingHook::default());
        let mut store = store();
        store.set_render_hook(Arc::clone(&hook) as Arc<dyn RenderHook>);

        assert!(store.submit().is_err());
        assert!(hook.calls().is_empty());
    }

    #[test]
    fn submit_fires_submitted_event() {
        let hook = Arc::new(RecordingHook::default());
        let mut store = store();
        store.set_render_hook(Arc::clone(&hook) as Arc<dyn RenderHook>);

        store.add_item("a", Some("A"), 1).unwrap();
        store.submit().unwrap();

        let calls = hook.calls();
        assert_eq!(calls.last().unwrap().0, CartEvent::Submitted);
        assert!(calls.last().unwrap().1.is_empty());
    }

    // -----------------------------------------------------------------------
    // Write failures
    // -----------------------------------------------------------------------

    #[test]
    fn write_failure_surfaces_as_storage_error() {
        let store = CartStore::new(Arc::new(WriteFailStore));
        let err = store.add_item("a", Some("A"), 1).unwrap_err();
        assert!(matches!(err, CartError::Storage(_)));
    }

    #[test]
    fn hook_does_not_fire_when_write_fails() {
        let hook = Arc::new(RecordingHook::default());
        let mut store = CartStore::new(Arc::new(WriteFailStore));
        store.set_render_hook(Arc::clone(&hook) as Arc<dyn RenderHook>);

        assert!(store.add_item("a", Some("A"), 1).is_err());
        assert!(hook.calls().is_empty());
    }
}
