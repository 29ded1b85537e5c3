//! Shopping cart module.
//!
//! Contains the cart store, line items keyed by `(product, size)`
//! fingerprint, and the summary projections.

mod cart;
mod summary;

pub use cart::{Cart, Fingerprint, LineItem};
pub use summary::CartSummary;
