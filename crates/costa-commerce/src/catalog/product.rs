//! Product types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are supplied once at startup and treated as read-only for the
/// lifetime of the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Category label (e.g., "Men", "Women").
    pub category: String,
    /// Color name (e.g., "Dark Blue").
    pub color: String,
    /// Full description for the detail view.
    pub description: String,
    /// Current selling price.
    pub price: Money,
    /// Pre-discount price. When present, expected to be >= `price`;
    /// assumed by callers, not enforced here.
    pub original_price: Option<Money>,
    /// Image URL/path. Opaque to the core, passed through for display.
    pub image: String,
    /// Offered size labels, in display order. Non-empty, distinct.
    pub sizes: Vec<String>,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        color: impl Into<String>,
        price: Money,
        sizes: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            color: color.into(),
            description: String::new(),
            price,
            original_price: None,
            image: String::new(),
            sizes: sizes.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Set the pre-discount price.
    pub fn with_original_price(mut self, original_price: Money) -> Self {
        self.original_price = Some(original_price);
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Check whether a size label is offered for this product.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Check if this product is discounted (has an original price above the
    /// selling price).
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|op| op.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Discount percentage for the sale badge, rounded to a whole number.
    pub fn discount_percent(&self) -> Option<i64> {
        self.original_price.and_then(|op| {
            if op.amount_cents > self.price.amount_cents {
                let ratio = self.price.amount_cents as f64 / op.amount_cents as f64;
                Some(((1.0 - ratio) * 100.0).round() as i64)
            } else {
                None
            }
        })
    }
}
