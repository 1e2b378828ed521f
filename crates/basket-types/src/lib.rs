//! Foundation types for basket.
//!
//! This crate provides the data model shared by every other basket crate:
//! the cart itself, its entries, and the small input-normalization helpers
//! used at the API boundary.
//!
//! # Key Types
//!
//! - [`Cart`] — Ordered, id-unique collection of selected items
//! - [`CartEntry`] — One `{id, name, qty}` record within a cart
//! - [`qty`] — Quantity coercion for untyped caller input
//! - [`slug`] — Identifier derivation from display names

pub mod cart;
pub mod entry;
pub mod qty;
pub mod slug;

pub use cart::Cart;
pub use entry::CartEntry;
pub use qty::{coerce_add_qty, coerce_update_qty, parse_qty};
pub use slug::slugify;
