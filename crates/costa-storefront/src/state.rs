//! Single-session storefront state.
//!
//! One value owns everything the UI mutates: the cart, the query state, and
//! the selection session for whichever product detail view is open. Every
//! method corresponds to a discrete user action and runs synchronously to
//! completion; state is created at application start and discarded at
//! session end.

use costa_commerce::cart::{Cart, CartSummary, LineItem};
use costa_commerce::catalog::{Catalog, Product};
use costa_commerce::error::StorefrontError;
use costa_commerce::ids::ProductId;
use costa_commerce::search::{query, CategoryFilter, QueryState, SortMode};
use costa_commerce::selection::SelectionSession;
use tracing::{debug, info};

/// The storefront session: catalog in, cart and query state out.
#[derive(Debug, Clone)]
pub struct StorefrontState {
    catalog: Catalog,
    cart: Cart,
    query: QueryState,
    selection: Option<SelectionSession>,
}

impl StorefrontState {
    /// Start a session over a catalog with an empty cart and default query
    /// state. The cart currency follows the catalog's products.
    pub fn new(catalog: Catalog) -> Self {
        let currency = catalog
            .products()
            .first()
            .map(|p| p.price.currency)
            .unwrap_or_default();
        Self {
            catalog,
            cart: Cart::new(currency),
            query: QueryState::new(),
            selection: None,
        }
    }

    /// The catalog this session browses.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The current query state.
    pub fn query_state(&self) -> &QueryState {
        &self.query
    }

    /// The selection session for the open product detail view, if any.
    pub fn selection(&self) -> Option<&SelectionSession> {
        self.selection.as_ref()
    }

    // ---- query controls ---------------------------------------------------

    /// Update the free-text search.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.query.search_text = text.into();
        debug!(search = %self.query.search_text, "search text changed");
    }

    /// Update the category filter.
    pub fn set_category(&mut self, category: CategoryFilter) {
        debug!(category = %category.label(), "category filter changed");
        self.query.category = category;
    }

    /// Update the sort mode.
    pub fn set_sort(&mut self, sort: SortMode) {
        debug!(sort = sort.as_str(), "sort mode changed");
        self.query.sort = sort;
    }

    /// The product list under the current query state, freshly computed.
    pub fn visible_products(&self) -> Vec<Product> {
        let results = query(&self.catalog, &self.query);
        debug!(count = results.len(), "query recomputed");
        results
    }

    // ---- product detail / selection ---------------------------------------

    /// Open a product detail view, starting a selection session for it.
    /// Replaces any session already open.
    pub fn open_product(&mut self, id: ProductId) -> Result<(), StorefrontError> {
        let product = self
            .catalog
            .get(id)
            .ok_or(StorefrontError::ProductNotFound(id))?;
        debug!(product = %product.name, "product opened");
        self.selection = Some(SelectionSession::open(product.clone()));
        Ok(())
    }

    /// Close the product detail view, discarding the in-progress selection.
    pub fn close_product(&mut self) {
        self.selection = None;
    }

    /// Choose a size in the open detail view.
    pub fn select_size(&mut self, size: impl Into<String>) -> Result<(), StorefrontError> {
        let session = self
            .selection
            .as_mut()
            .ok_or(StorefrontError::NoActiveSelection)?;
        session.set_size(size)
    }

    /// Set the quantity in the open detail view (clamped to >= 1).
    pub fn set_quantity(&mut self, quantity: i64) -> Result<(), StorefrontError> {
        let session = self
            .selection
            .as_mut()
            .ok_or(StorefrontError::NoActiveSelection)?;
        session.set_quantity(quantity);
        Ok(())
    }

    /// Commit the open selection into the cart and close the detail view.
    ///
    /// With no size chosen the commit is rejected and the detail view stays
    /// open with its state intact.
    pub fn commit_selection(&mut self) -> Result<(), StorefrontError> {
        let session = self
            .selection
            .take()
            .ok_or(StorefrontError::NoActiveSelection)?;
        if !session.can_commit() {
            self.selection = Some(session);
            return Err(StorefrontError::NoSizeSelected);
        }
        info!(
            product = %session.product().name,
            size = session.selected_size().unwrap_or_default(),
            quantity = session.quantity(),
            "selection committed to cart"
        );
        session.commit(&mut self.cart)
    }

    // ---- cart controls ----------------------------------------------------

    /// Replace a line item's quantity; zero removes it. Absent fingerprints
    /// are a no-op.
    pub fn update_quantity(&mut self, product_id: ProductId, size: &str, quantity: i64) {
        debug!(%product_id, size, quantity, "cart quantity updated");
        self.cart.update_quantity(product_id, size, quantity);
    }

    /// Remove a line item. Idempotent.
    pub fn remove_item(&mut self, product_id: ProductId, size: &str) {
        debug!(%product_id, size, "cart line removed");
        self.cart.remove_item(product_id, size);
    }

    /// The cart lines in first-insertion order, for display and hand-off.
    pub fn cart_items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// The badge count and running total, recomputed from cart state.
    pub fn summary(&self) -> CartSummary {
        self.cart.summary()
    }
}
