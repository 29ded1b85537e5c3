//! Storefront error types.
//!
//! The cart store itself has no failure modes: its transitions are total
//! functions over the current state. Errors only arise at the seams where
//! user input meets a precondition, and the selection session reports them
//! so the caller can block the action.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorefrontError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Requested size is not offered for the product.
    #[error("Size {size:?} not available for {product}")]
    SizeNotAvailable { product: String, size: String },

    /// Commit attempted before a size was chosen.
    #[error("No size selected")]
    NoSizeSelected,

    /// Selection action issued while no product detail view is open.
    #[error("No product is open for selection")]
    NoActiveSelection,
}
