//! The [`KeyValueStore`] trait defining the storage interface.
//!
//! Any backend (in-memory, filesystem, browser bridge) implements this
//! trait to provide durable key-value persistence for the cart.

use crate::error::StorageResult;

/// A durable string-to-string key-value store.
///
/// All implementations must satisfy these invariants:
/// - `get` for an absent key returns `Ok(None)`, never an error.
/// - `set` replaces any existing value for the key.
/// - The store never interprets values — it is a pure key-value store.
/// - Write I/O errors are propagated, never silently ignored.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write `value` under `key`, replacing any existing value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete the value under `key`.
    ///
    /// Returns `Ok(true)` if the key existed and was removed, `Ok(false)`
    /// if it did not exist.
    fn remove(&self, key: &str) -> StorageResult<bool>;

    /// Check whether a key has a stored value.
    fn contains(&self, key: &str) -> StorageResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}
