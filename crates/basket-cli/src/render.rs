//! Terminal rendering of the cart: the CLI's presentation layer.
//!
//! [`TerminalRenderer`] implements [`RenderHook`], so every mutation made
//! through the store redraws the cart, badge first, then one line per
//! entry.

use colored::Colorize;

use basket_core::{Cart, CartEvent, RenderHook};

/// Renders the cart to stdout after every mutation.
pub struct TerminalRenderer;

impl TerminalRenderer {
    /// Draw the full cart: badge count, item lines, empty message.
    pub fn render_cart(cart: &Cart) {
        println!(
            "Cart ({} {})",
            cart.total_quantity().to_string().bold(),
            if cart.total_quantity() == 1 { "item" } else { "items" },
        );
        if cart.is_empty() {
            println!("  {}", "Your cart is empty".dimmed());
            return;
        }
        for entry in cart.iter() {
            println!("  {} × {}", format!("{:>3}", entry.qty).cyan(), entry.name);
        }
    }
}

impl RenderHook for TerminalRenderer {
    fn cart_changed(&self, event: &CartEvent, cart: &Cart) {
        match event {
            CartEvent::ItemAdded { id, qty } => {
                println!("{} added {} × {}", "✓".green(), qty, id.yellow());
            }
            CartEvent::ItemRemoved { id } => {
                println!("{} removed {}", "✓".green(), id.yellow());
            }
            CartEvent::QuantitySet { id, qty: 0 } => {
                println!("{} removed {}", "✓".green(), id.yellow());
            }
            CartEvent::QuantitySet { id, qty } => {
                println!("{} set {} to {}", "✓".green(), id.yellow(), qty);
            }
            CartEvent::Cleared => {
                println!("{} cart emptied", "✓".green());
            }
            CartEvent::Submitted => {
                println!(
                    "{} {}",
                    "✓".green().bold(),
                    "Order submitted. We will contact you shortly.".bold(),
                );
            }
        }
        Self::render_cart(cart);
    }
}
