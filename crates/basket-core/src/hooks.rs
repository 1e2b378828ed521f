//! The presentation contract between the cart store and its renderer.
//!
//! The store calls [`RenderHook::cart_changed`] synchronously after every
//! successful save, passing the event and the cart as just persisted. The
//! presentation layer redraws from that cart; it never reads storage
//! itself.

use basket_types::Cart;

use crate::event::CartEvent;

/// Callback invoked after every successful cart mutation.
pub trait RenderHook: Send + Sync {
    /// The cart was persisted; `cart` is the state that was just written.
    fn cart_changed(&self, event: &CartEvent, cart: &Cart);
}

/// A render hook that does nothing. The default for headless use.
pub struct NoOpRenderHook;

impl RenderHook for NoOpRenderHook {
    fn cart_changed(&self, _event: &CartEvent, _cart: &Cart) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_hook_accepts_any_event() {
        let hook = NoOpRenderHook;
        hook.cart_changed(&CartEvent::Cleared, &Cart::new());
    }
}
