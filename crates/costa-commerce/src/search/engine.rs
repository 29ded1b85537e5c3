//! The catalog query engine.
//!
//! A pure function from (catalog, query state) to an ordered result list.
//! Recomputed on every input change; the catalog itself is never mutated.

use crate::catalog::{Catalog, Product};
use crate::search::{CategoryFilter, QueryState, SortMode};

/// Filter and order the catalog for display.
///
/// A product is included when both the search text and the category filter
/// match; sorting is applied afterwards and is stable, so products that
/// compare equal keep their original catalog order.
pub fn query(catalog: &Catalog, state: &QueryState) -> Vec<Product> {
    let needle = state.search_text.to_lowercase();

    let mut results: Vec<Product> = catalog
        .iter()
        .filter(|p| matches_search(p, &needle) && matches_category(p, &state.category))
        .cloned()
        .collect();

    match state.sort {
        // Catalog order is the featured order.
        SortMode::Featured => {}
        SortMode::PriceAsc => {
            results.sort_by(|a, b| a.price.amount_cents.cmp(&b.price.amount_cents));
        }
        SortMode::PriceDesc => {
            results.sort_by(|a, b| b.price.amount_cents.cmp(&a.price.amount_cents));
        }
        SortMode::NameAsc => {
            results.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
    }

    results
}

/// Case-insensitive substring match against name, category, or color.
/// `needle` is already lower-cased; an empty needle matches everything.
fn matches_search(product: &Product, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    product.name.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
        || product.color.to_lowercase().contains(needle)
}

/// Category match: the sentinel matches everything; otherwise the structured
/// category must equal the label exactly, or the product name must contain
/// the label as a case-insensitive substring. The fallback lets a label like
/// "Skinny" select products whose name mentions it even when their
/// structured category differs. Both branches are intentional.
fn matches_category(product: &Product, filter: &CategoryFilter) -> bool {
    match filter {
        CategoryFilter::All => true,
        CategoryFilter::Named(label) => {
            product.category == *label
                || product.name.to_lowercase().contains(&label.to_lowercase())
        }
    }
}
