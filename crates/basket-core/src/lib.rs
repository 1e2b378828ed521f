//! The basket cart store.
//!
//! [`CartStore`] is the sole owner of cart state: every read and write goes
//! through it. It holds a reference to an injected [`KeyValueStore`]
//! backend and an injected [`RenderHook`], and follows a strict
//! load-transform-save discipline — the cart is re-read from storage at the
//! start of every operation, mutated, and written back in full. There is no
//! in-memory cache, so the store always reflects the latest persisted state.
//!
//! # Modules
//!
//! - [`config`] — [`CartConfig`]: the storage key
//! - [`error`] — [`CartError`] and the [`CartResult`] alias
//! - [`event`] — [`CartEvent`]: what changed, carried to the render hook
//! - [`hooks`] — The [`RenderHook`] presentation contract
//! - [`store`] — [`CartStore`] itself and [`SubmitSummary`]

pub mod config;
pub mod error;
pub mod event;
pub mod hooks;
pub mod store;

pub use basket_types::{Cart, CartEntry};
pub use config::{CartConfig, DEFAULT_STORAGE_KEY};
pub use error::{CartError, CartResult};
pub use event::CartEvent;
pub use hooks::{NoOpRenderHook, RenderHook};
pub use store::{CartStore, SubmitSummary};
