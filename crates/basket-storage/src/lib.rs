//! Persistent key-value storage for basket.
//!
//! The cart treats its backing store as a flat, durable string-to-string
//! map — the same contract a browser exposes through local storage. This
//! crate defines that contract as the [`KeyValueStore`] trait and ships two
//! backends:
//!
//! - [`InMemoryKeyValueStore`] — `HashMap`-based store for tests and embedding
//! - [`FileKeyValueStore`] — a single JSON file on disk, re-read on every
//!   operation
//!
//! # Design Rules
//!
//! 1. Absent keys are `Ok(None)`, never an error.
//! 2. The store never interprets values — it is a pure key-value store.
//! 3. Write I/O errors are propagated, never silently ignored.
//! 4. A corrupt backing file degrades reads to absent keys; the next write
//!    replaces it wholesale.

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use error::{StorageError, StorageResult};
pub use file::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;
pub use traits::KeyValueStore;
