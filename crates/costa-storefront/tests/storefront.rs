//! End-to-end storefront session scenarios.

use costa_commerce::prelude::*;
use costa_storefront::{CheckoutConfig, StorefrontState};

fn small_catalog() -> Catalog {
    Catalog::new(vec![
        Product::new(
            1,
            "Classic Straight Leg Jeans",
            "Men",
            "Blue",
            Money::new(65000, Currency::INR),
            &["32", "34"],
        )
        .with_image("/img/classic-straight-leg.jpg"),
        Product::new(
            2,
            "Skinny Fit Dark Wash",
            "Women",
            "Dark Blue",
            Money::new(65000, Currency::INR),
            &["30"],
        )
        .with_image("/img/skinny-fit-dark-wash.jpg"),
    ])
}

#[test]
fn browse_select_commit_remove() {
    let mut state = StorefrontState::new(small_catalog());

    // Empty search and no filter show the full catalog in supply order.
    state.set_search_text("");
    state.set_category(CategoryFilter::from_label("All"));
    let shown = state.visible_products();
    assert_eq!(shown.len(), 2);
    assert_eq!(shown[0].id, ProductId::new(1));

    // Open product 1, pick size 32, quantity 2, commit.
    state.open_product(ProductId::new(1)).unwrap();
    state.select_size("32").unwrap();
    state.set_quantity(2).unwrap();
    state.commit_selection().unwrap();

    assert_eq!(state.cart_items().len(), 1);
    assert_eq!(state.summary().item_count, 2);
    assert_eq!(state.summary().total, Money::new(130000, Currency::INR));

    // Removing the line empties the cart.
    state.remove_item(ProductId::new(1), "32");
    assert!(state.cart().is_empty());
    assert_eq!(state.summary().item_count, 0);
    assert_eq!(state.summary().total, Money::new(0, Currency::INR));
}

#[test]
fn repeat_commits_merge_into_one_line() {
    let mut state = StorefrontState::new(small_catalog());

    for _ in 0..2 {
        state.open_product(ProductId::new(1)).unwrap();
        state.select_size("32").unwrap();
        state.commit_selection().unwrap();
    }

    assert_eq!(state.cart_items().len(), 1);
    assert_eq!(state.summary().item_count, 2);
}

#[test]
fn quantity_update_to_zero_removes_the_line() {
    let mut state = StorefrontState::new(small_catalog());

    state.open_product(ProductId::new(2)).unwrap();
    state.select_size("30").unwrap();
    state.commit_selection().unwrap();
    assert_eq!(state.cart_items().len(), 1);

    state.update_quantity(ProductId::new(2), "30", 0);
    assert!(state.cart().is_empty());
}

#[test]
fn search_drives_the_visible_list() {
    let mut state = StorefrontState::new(small_catalog());

    state.set_search_text("BLACK");
    assert!(state.visible_products().is_empty());

    state.set_search_text("dark blue");
    let shown = state.visible_products();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].id, ProductId::new(2));
}

#[test]
fn handoff_reflects_the_cart() {
    let mut state = StorefrontState::new(small_catalog());

    state.open_product(ProductId::new(1)).unwrap();
    state.select_size("32").unwrap();
    state.set_quantity(2).unwrap();
    state.commit_selection().unwrap();

    state.open_product(ProductId::new(2)).unwrap();
    state.select_size("30").unwrap();
    state.commit_selection().unwrap();

    let config = CheckoutConfig::default();
    let message = config.message(state.cart());

    assert!(message.contains("1. Classic Straight Leg Jeans (Size 32) x2"));
    assert!(message.contains("2. Skinny Fit Dark Wash (Size 30) x1"));
    assert!(message.contains("Total: \u{20b9}1950.00"));

    let url = config.handoff_url(state.cart());
    assert!(url.starts_with("https://wa.me/9873819147?text="));
}

#[test]
fn full_seed_catalog_session() {
    let mut state = StorefrontState::new(Catalog::denim_costa());

    // The "Skinny" label has no structured category; the name fallback
    // still surfaces both skinny fits.
    state.set_category(CategoryFilter::from_label("Skinny"));
    let shown = state.visible_products();
    assert_eq!(shown.len(), 2);
    assert!(shown.iter().all(|p| p.name.contains("Skinny")));

    // Price sort keeps supply order for the all-equal seed prices.
    state.set_category(CategoryFilter::from_label("All"));
    state.set_sort(SortMode::PriceAsc);
    let sorted: Vec<i64> = state.visible_products().iter().map(|p| p.id.get()).collect();
    assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6, 7]);
}
