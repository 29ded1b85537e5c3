//! Cart summary projections.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// The two values a display surface needs from the cart: the badge count and
/// the running total. Recomputed from cart state on request; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartSummary {
    /// Sum of quantities across all line items.
    pub item_count: i64,
    /// Sum of `price * quantity` across all line items.
    pub total: Money,
}

impl CartSummary {
    /// Format the total for display (e.g., "₹1950.00").
    pub fn total_display(&self) -> String {
        self.total.display()
    }
}
