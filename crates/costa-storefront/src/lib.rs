//! Single-session storefront state for Denim Costa.
//!
//! Wires the `costa-commerce` domain core into the event-driven surface the
//! UI talks to: one [`StorefrontState`] per browsing session, plus the
//! checkout hand-off that turns the finalized cart into a pre-filled
//! messaging link.
//!
//! # Example
//!
//! ```
//! use costa_commerce::prelude::*;
//! use costa_storefront::{CheckoutConfig, StorefrontState};
//!
//! let mut state = StorefrontState::new(Catalog::denim_costa());
//! state.set_search_text("straight");
//!
//! let shown = state.visible_products();
//! state.open_product(shown[0].id).unwrap();
//! state.select_size("32").unwrap();
//! state.commit_selection().unwrap();
//!
//! let url = CheckoutConfig::default().handoff_url(state.cart());
//! assert!(url.starts_with("https://wa.me/"));
//! ```

pub mod checkout;
pub mod state;

pub use checkout::CheckoutConfig;
pub use state::StorefrontState;
