//! The size/quantity selection session.

use crate::cart::Cart;
use crate::catalog::Product;
use crate::error::StorefrontError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Transient state for an open product detail view.
///
/// Captures the user's in-progress size and quantity choice. The session is
/// created when a product is opened and destroyed on close or on a
/// successful commit; committing moves the selection into the cart exactly
/// once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionSession {
    product: Product,
    selected_size: Option<String>,
    quantity: i64,
}

impl SelectionSession {
    /// Open a session for a product: no size chosen yet, quantity 1.
    pub fn open(product: Product) -> Self {
        Self {
            product,
            selected_size: None,
            quantity: 1,
        }
    }

    /// The product under selection.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// The chosen size, if any.
    pub fn selected_size(&self) -> Option<&str> {
        self.selected_size.as_deref()
    }

    /// The chosen quantity (always >= 1).
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Choose a size. The size must be one the product offers; this is the
    /// seam that enforces the cart store's precondition.
    pub fn set_size(&mut self, size: impl Into<String>) -> Result<(), StorefrontError> {
        let size = size.into();
        if !self.product.has_size(&size) {
            return Err(StorefrontError::SizeNotAvailable {
                product: self.product.name.clone(),
                size,
            });
        }
        self.selected_size = Some(size);
        Ok(())
    }

    /// Set the quantity, clamped to a minimum of 1.
    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity.max(1);
    }

    /// Increase the quantity by one.
    pub fn increment(&mut self) {
        self.quantity += 1;
    }

    /// Decrease the quantity by one. Going below 1 is a no-op, not an error.
    pub fn decrement(&mut self) {
        self.quantity = (self.quantity - 1).max(1);
    }

    /// Whether commit would succeed; drives disabling the add-to-cart
    /// action. True exactly when a size has been chosen.
    pub fn can_commit(&self) -> bool {
        self.selected_size.is_some()
    }

    /// Running total for the add-to-cart button label.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply(self.quantity)
    }

    /// Commit the selection into the cart and discard the session.
    ///
    /// Calls [`Cart::add_item`] exactly once. There is no implicit default
    /// size: with no size chosen the commit is rejected and the session is
    /// consumed unchanged by the caller's error path.
    pub fn commit(self, cart: &mut Cart) -> Result<(), StorefrontError> {
        let size = self.selected_size.ok_or(StorefrontError::NoSizeSelected)?;
        cart.add_item(&self.product, size, self.quantity);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn jeans() -> Product {
        Product::new(
            1,
            "Classic Straight Leg Jeans",
            "Men",
            "Blue",
            Money::new(65000, Currency::INR),
            &["30", "32", "34"],
        )
    }

    #[test]
    fn test_open_defaults() {
        let session = SelectionSession::open(jeans());
        assert_eq!(session.selected_size(), None);
        assert_eq!(session.quantity(), 1);
        assert!(!session.can_commit());
    }

    #[test]
    fn test_set_size_validates_against_product() {
        let mut session = SelectionSession::open(jeans());
        assert!(session.set_size("32").is_ok());
        assert_eq!(session.selected_size(), Some("32"));

        let err = session.set_size("XL").unwrap_err();
        assert_eq!(
            err,
            StorefrontError::SizeNotAvailable {
                product: "Classic Straight Leg Jeans".to_string(),
                size: "XL".to_string(),
            }
        );
        // The previous choice survives a rejected one.
        assert_eq!(session.selected_size(), Some("32"));
    }

    #[test]
    fn test_quantity_clamps_at_one() {
        let mut session = SelectionSession::open(jeans());
        session.decrement();
        assert_eq!(session.quantity(), 1);

        session.set_quantity(0);
        assert_eq!(session.quantity(), 1);

        session.set_quantity(4);
        session.decrement();
        assert_eq!(session.quantity(), 3);

        session.increment();
        assert_eq!(session.quantity(), 4);
    }

    #[test]
    fn test_line_total_follows_quantity() {
        let mut session = SelectionSession::open(jeans());
        session.set_quantity(2);
        assert_eq!(session.line_total().amount_cents, 130000);
    }

    #[test]
    fn test_commit_without_size_is_rejected() {
        let session = SelectionSession::open(jeans());
        let mut cart = Cart::default();
        assert_eq!(
            session.commit(&mut cart),
            Err(StorefrontError::NoSizeSelected)
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_commit_adds_exactly_once() {
        let mut session = SelectionSession::open(jeans());
        session.set_size("32").unwrap();
        session.set_quantity(2);

        let mut cart = Cart::default();
        session.commit(&mut cart).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total().amount_cents, 130000);
    }
}
