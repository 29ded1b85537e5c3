//! Checkout hand-off.
//!
//! The storefront does not process payment; it hands the finalized cart to
//! an external messaging channel. This module builds the itemized order
//! message and the deep link that opens the channel with that message
//! pre-filled. Transport (actually opening the link) stays outside the core.

use costa_commerce::cart::Cart;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use tracing::debug;

/// Contact and delivery settings for the hand-off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// WhatsApp phone number the order message is sent to.
    pub phone: String,
    /// Fixed delivery address quoted in the message.
    pub delivery_address: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            phone: "9873819147".to_string(),
            delivery_address: "Plot No-12A, Lions Enclave, Marble Block, Vikas Nagar\n\
                               Near St Bharti School, Hastal, Uttam Nagar New Delhi-59"
                .to_string(),
        }
    }
}

impl CheckoutConfig {
    /// Build the human-readable order message: one line per cart line in
    /// first-insertion order, the grand total, and the delivery address.
    pub fn message(&self, cart: &Cart) -> String {
        let mut msg = String::from("I want to checkout my order.\n\n");
        for (index, item) in cart.items().iter().enumerate() {
            let _ = writeln!(
                msg,
                "{}. {} (Size {}) x{} = {}",
                index + 1,
                item.name,
                item.size,
                item.quantity,
                item.line_total().display()
            );
        }
        let _ = writeln!(msg, "\nTotal: {}", cart.total().display());
        let _ = write!(msg, "\nPlease deliver to: {}", self.delivery_address);
        msg
    }

    /// Build the messaging deep link with the order message URL-encoded.
    pub fn handoff_url(&self, cart: &Cart) -> String {
        let message = self.message(cart);
        let url = format!(
            "https://wa.me/{}?text={}",
            self.phone,
            urlencoding::encode(&message)
        );
        debug!(lines = cart.len(), "checkout hand-off link built");
        url
    }
}
