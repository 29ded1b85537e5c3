//! Catalog search module.
//!
//! Contains the query state (search text, category filter, sort mode) and
//! the pure engine that turns it into an ordered product list.

mod engine;
mod query;

pub use engine::query;
pub use query::{CategoryFilter, QueryState, SortMode, CATEGORY_LABELS};
