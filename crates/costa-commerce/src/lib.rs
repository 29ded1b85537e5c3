//! Commerce domain types and logic for the Denim Costa storefront.
//!
//! This crate is the pure core behind the storefront UI:
//!
//! - **Catalog**: the immutable ordered product list and the seeded
//!   Denim Costa collection
//! - **Search**: the query engine filtering and ordering the catalog from
//!   search text, category filter, and sort mode
//! - **Selection**: the transient size/quantity choice for an open product
//! - **Cart**: the cart store, line items keyed by `(product, size)`
//!   fingerprint, and summary projections
//!
//! Everything here is synchronous, single-session, and in-memory; rendering,
//! navigation, and the checkout transport live elsewhere.
//!
//! # Example
//!
//! ```
//! use costa_commerce::prelude::*;
//!
//! let catalog = Catalog::denim_costa();
//! let state = QueryState::new().with_search("skinny");
//! let results = query(&catalog, &state);
//! assert!(!results.is_empty());
//!
//! let mut session = SelectionSession::open(results[0].clone());
//! session.set_size("32").unwrap();
//! session.set_quantity(2);
//!
//! let mut cart = Cart::default();
//! session.commit(&mut cart).unwrap();
//! assert_eq!(cart.item_count(), 2);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;
pub mod selection;

pub use error::StorefrontError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StorefrontError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Cart
    pub use crate::cart::{Cart, CartSummary, Fingerprint, LineItem};

    // Search
    pub use crate::search::{query, CategoryFilter, QueryState, SortMode, CATEGORY_LABELS};

    // Selection
    pub use crate::selection::SelectionSession;
}
