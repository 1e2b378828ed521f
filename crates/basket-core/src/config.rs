use serde::{Deserialize, Serialize};

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "cart_v1";

/// Configuration for a [`CartStore`](crate::CartStore).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CartConfig {
    /// The key under which the serialized cart lives in the backing store.
    ///
    /// Fixed for the lifetime of the store; there is no versioning or
    /// migration beyond choosing a new key.
    pub storage_key: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl CartConfig {
    /// A configuration using the given storage key.
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            storage_key: key.into(),
        }
    }
}
