//! Query state: the three inputs driving catalog display.

use serde::{Deserialize, Serialize};

/// Category labels offered by the filter surface, in display order.
///
/// Labels beyond the structured product categories ("Skinny", "Bootcut", …)
/// still work as filters through the name-substring fallback in the engine.
pub const CATEGORY_LABELS: &[&str] = &[
    "All", "Men", "Women", "Kids", "Skinny", "Straight", "Bootcut", "Wide Leg",
];

/// Sort options for the product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortMode {
    /// Preserve original catalog order.
    #[default]
    Featured,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by name A-Z.
    NameAsc,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Featured => "featured",
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
            SortMode::NameAsc => "name-asc",
        }
    }

    /// Parse a sort token. Unknown tokens fall back to `Featured`, matching
    /// the sort selector's default branch.
    pub fn from_str(s: &str) -> Self {
        match s {
            "price-asc" => SortMode::PriceAsc,
            "price-desc" => SortMode::PriceDesc,
            "name-asc" => SortMode::NameAsc,
            _ => SortMode::Featured,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortMode::Featured => "Featured",
            SortMode::PriceAsc => "Price: Low to High",
            SortMode::PriceDesc => "Price: High to Low",
            SortMode::NameAsc => "Name: A to Z",
        }
    }
}

/// Category filter: a specific label, or the "no filter" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// No filtering; every product matches.
    #[default]
    All,
    /// Filter by a category label.
    Named(String),
}

impl CategoryFilter {
    /// Create a filter from a label; "All" maps to the sentinel.
    pub fn from_label(label: &str) -> Self {
        if label == "All" {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(label.to_string())
        }
    }

    /// Check if this is the "no filter" sentinel.
    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    /// The label as shown on the filter surface.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Named(label) => label,
        }
    }
}

/// The combination of search text, category filter, and sort mode.
///
/// Owned by the UI layer and passed into the query engine explicitly; the
/// engine has no knowledge of how the three controls are presented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct QueryState {
    /// Free-text search, possibly empty. Empty matches every product.
    pub search_text: String,
    /// Category filter.
    pub category: CategoryFilter,
    /// Sort mode, applied after filtering.
    pub sort: SortMode,
}

impl QueryState {
    /// Create a default query state (empty search, no filter, featured).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Set the category filter.
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Set the sort mode.
    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }
}
