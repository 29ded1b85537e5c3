//! Cart store and line item types.

use crate::cart::CartSummary;
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// The identity of a cart line item: one product in one specific size.
///
/// No two line items in a cart ever share a fingerprint; adding the same
/// product/size combination again merges into the existing line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint {
    /// The product being purchased.
    pub product_id: ProductId,
    /// The chosen size label.
    pub size: String,
}

impl Fingerprint {
    /// Create a fingerprint.
    pub fn new(product_id: ProductId, size: impl Into<String>) -> Self {
        Self {
            product_id,
            size: size.into(),
        }
    }
}

/// A line item in the cart.
///
/// `name`, `price`, and `image` are snapshots taken from the product at
/// first insertion and are not refreshed afterwards; the cart is a
/// point-in-time capture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// The product this line refers to.
    pub product_id: ProductId,
    /// The chosen size label.
    pub size: String,
    /// Product name at insertion time.
    pub name: String,
    /// Unit price at insertion time.
    pub price: Money,
    /// Image reference at insertion time.
    pub image: String,
    /// Quantity, always >= 1. A line at quantity 0 is removed, never stored.
    pub quantity: i64,
}

impl LineItem {
    fn snapshot(product: &Product, size: String, quantity: i64) -> Self {
        Self {
            product_id: product.id,
            size,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity,
        }
    }

    fn matches(&self, product_id: ProductId, size: &str) -> bool {
        self.product_id == product_id && self.size == size
    }

    /// This line's identity.
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::new(self.product_id, self.size.clone())
    }

    /// Total for this line (`price * quantity`).
    pub fn line_total(&self) -> Money {
        self.price.multiply(self.quantity)
    }
}

/// The cart store.
///
/// A mapping from fingerprint to line item, kept as an ordered list so that
/// first-insertion order is preserved for display. Mutated only through the
/// three transitions below (insert-or-merge, replace-quantity, delete); the
/// summary values are pure projections recomputed on every call, never
/// cached.
///
/// All transitions are total functions over the current state: given
/// well-formed input (a size drawn from the product's size list and a
/// quantity >= 1, the caller's precondition, not validated here) none of
/// them can fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<LineItem>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart. All line items must share this currency.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Insert-or-merge transition.
    ///
    /// If a line with fingerprint `(product.id, size)` exists, increments its
    /// quantity by `quantity`; otherwise appends a new line snapshotting
    /// `name`/`price`/`image` from the product. No upper bound on quantity.
    pub fn add_item(&mut self, product: &Product, size: impl Into<String>, quantity: i64) {
        let size = size.into();
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.matches(product.id, &size))
        {
            existing.quantity += quantity;
        } else {
            self.items.push(LineItem::snapshot(product, size, quantity));
        }
    }

    /// Replace-quantity transition.
    ///
    /// A `new_quantity` of zero behaves exactly as [`Cart::remove_item`];
    /// a positive value replaces the line's quantity unconditionally (no
    /// merge, no increment). An absent fingerprint is a silent no-op, which
    /// keeps UI retries idempotent.
    pub fn update_quantity(&mut self, product_id: ProductId, size: &str, new_quantity: i64) {
        if new_quantity <= 0 {
            self.remove_item(product_id, size);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.matches(product_id, size)) {
            item.quantity = new_quantity;
        }
    }

    /// Delete transition. Idempotent; absent fingerprints are a no-op.
    pub fn remove_item(&mut self, product_id: ProductId, size: &str) {
        self.items.retain(|i| !i.matches(product_id, size));
    }

    /// Remove every line item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `price * quantity` over all lines, recomputed from the current
    /// state on every call.
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(self.currency), |acc, i| acc + i.line_total())
    }

    /// Sum of quantities across all lines (the badge count, not the number
    /// of distinct lines).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Both summary projections in one value.
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            item_count: self.item_count(),
            total: self.total(),
        }
    }

    /// Line items in first-insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up a line item by fingerprint parts.
    pub fn get(&self, product_id: ProductId, size: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.matches(product_id, size))
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price_cents: i64, sizes: &[&str]) -> Product {
        Product::new(
            id,
            format!("Jeans {}", id),
            "Men",
            "Blue",
            Money::new(price_cents, Currency::INR),
            sizes,
        )
    }

    #[test]
    fn test_add_item_creates_line() {
        let mut cart = Cart::default();
        cart.add_item(&product(1, 65000, &["32", "34"]), "32", 1);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_add_same_fingerprint_merges() {
        let mut cart = Cart::default();
        let p = product(1, 65000, &["32", "34"]);

        cart.add_item(&p, "32", 1);
        cart.add_item(&p, "32", 1);

        assert_eq!(cart.len(), 1, "same fingerprint must not split lines");
        assert_eq!(cart.get(p.id, "32").unwrap().quantity, 2);
    }

    #[test]
    fn test_same_product_different_size_splits() {
        let mut cart = Cart::default();
        let p = product(1, 65000, &["32", "34"]);

        cart.add_item(&p, "32", 1);
        cart.add_item(&p, "34", 1);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_fingerprint_uniqueness() {
        let mut cart = Cart::default();
        let a = product(1, 65000, &["32", "34"]);
        let b = product(2, 65000, &["30"]);

        cart.add_item(&a, "32", 2);
        cart.add_item(&b, "30", 1);
        cart.add_item(&a, "34", 1);
        cart.add_item(&a, "32", 3);

        let mut seen = std::collections::HashSet::new();
        for item in cart.items() {
            assert!(seen.insert(item.fingerprint()), "duplicate fingerprint");
        }
        assert_eq!(cart.len(), 3);
    }

    #[test]
    fn test_update_quantity_replaces() {
        let mut cart = Cart::default();
        let p = product(1, 65000, &["32"]);
        cart.add_item(&p, "32", 2);

        cart.update_quantity(p.id, "32", 5);
        assert_eq!(cart.get(p.id, "32").unwrap().quantity, 5);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::default();
        let p = product(1, 65000, &["32"]);
        cart.add_item(&p, "32", 2);

        cart.update_quantity(p.id, "32", 0);
        assert!(cart.get(p.id, "32").is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_absent_fingerprint_is_noop() {
        let mut cart = Cart::default();
        let p = product(1, 65000, &["32"]);
        cart.add_item(&p, "32", 2);

        cart.update_quantity(ProductId::new(999), "XL", 4);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(p.id, "32").unwrap().quantity, 2);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::default();
        cart.remove_item(ProductId::new(999), "XL");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_recomputes() {
        let mut cart = Cart::default();
        let a = product(1, 65000, &["32"]);
        let b = product(2, 65000, &["30"]);

        cart.add_item(&a, "32", 2);
        cart.add_item(&b, "30", 1);
        assert_eq!(cart.total().amount_cents, 195000);

        cart.update_quantity(a.id, "32", 1);
        assert_eq!(cart.total().amount_cents, 130000);

        cart.clear();
        assert_eq!(cart.total().amount_cents, 0);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::default();
        let a = product(1, 65000, &["32"]);
        let b = product(2, 65000, &["30"]);
        let c = product(3, 65000, &["28"]);

        cart.add_item(&b, "30", 1);
        cart.add_item(&a, "32", 1);
        cart.add_item(&c, "28", 1);
        // Merging must not reorder.
        cart.add_item(&b, "30", 1);

        let ids: Vec<i64> = cart.items().iter().map(|i| i.product_id.get()).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_snapshot_semantics() {
        let mut cart = Cart::default();
        let mut p = product(1, 65000, &["32"]);
        cart.add_item(&p, "32", 1);

        // Later changes to the source product do not reach the cart.
        p.price = Money::new(99999, Currency::INR);
        p.name = "Renamed".to_string();

        let line = cart.get(ProductId::new(1), "32").unwrap();
        assert_eq!(line.price.amount_cents, 65000);
        assert_eq!(line.name, "Jeans 1");
    }

    #[test]
    fn test_summary_projection() {
        let mut cart = Cart::default();
        let a = product(1, 65000, &["32"]);
        cart.add_item(&a, "32", 2);

        let summary = cart.summary();
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total.amount_cents, 130000);
    }
}
