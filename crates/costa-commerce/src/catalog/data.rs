//! Seed catalog for the Denim Costa storefront.

use crate::catalog::{Catalog, Product};
use crate::money::{Currency, Money};

const PRICE: i64 = 65000;
const ORIGINAL_PRICE: i64 = 79268;

const MEN_SIZES: &[&str] = &["30", "32", "34", "36", "38", "40", "42", "44"];
const WOMEN_SIZES: &[&str] = &["26", "28", "30", "32", "34", "40", "42", "44"];

impl Catalog {
    /// The Denim Costa launch collection, in featured order.
    pub fn denim_costa() -> Self {
        let inr = |cents| Money::new(cents, Currency::INR);

        Catalog::new(vec![
            Product::new(1, "Classic Straight Leg Jeans", "Men", "Blue", inr(PRICE), MEN_SIZES)
                .with_original_price(inr(ORIGINAL_PRICE))
                .with_image("/img/classic-straight-leg.jpg")
                .with_description(
                    "Timeless straight-leg jeans perfect for everyday wear with a \
                     comfortable fit and classic styling.",
                ),
            Product::new(2, "Skinny Fit Dark Wash", "Women", "Dark Blue", inr(PRICE), WOMEN_SIZES)
                .with_image("/img/skinny-fit-dark-wash.jpg")
                .with_description(
                    "Sleek skinny jeans in a rich dark wash that flatters your \
                     silhouette with stretch comfort.",
                ),
            Product::new(3, "Vintage Bootcut Jeans", "Women", "Light Blue", inr(PRICE), WOMEN_SIZES)
                .with_original_price(inr(ORIGINAL_PRICE))
                .with_image("/img/vintage-bootcut.jpg")
                .with_description(
                    "Retro-inspired bootcut jeans with a vintage wash and flared hem \
                     for a classic 70s vibe.",
                ),
            Product::new(4, "Relaxed Fit Carpenter Jeans", "Men", "Blue", inr(PRICE), MEN_SIZES)
                .with_image("/img/relaxed-carpenter.jpg")
                .with_description(
                    "Durable carpenter jeans with tool loops and hammer holder, \
                     perfect for work or casual wear.",
                ),
            Product::new(5, "High-Waisted Skinny Jeans", "Women", "Black", inr(PRICE), WOMEN_SIZES)
                .with_image("/img/high-waisted-skinny.jpg")
                .with_description(
                    "Flattering high-waisted skinny jeans that elongate your legs \
                     and provide all-day comfort.",
                ),
            Product::new(6, "Wide Leg Palazzo Jeans", "Women", "Light Blue", inr(PRICE), WOMEN_SIZES)
                .with_original_price(inr(ORIGINAL_PRICE))
                .with_image("/img/wide-leg-palazzo.jpg")
                .with_description(
                    "Trendy wide-leg jeans with a palazzo silhouette for a relaxed, \
                     bohemian-inspired look.",
                ),
            Product::new(7, "Distressed Slim Fit Jeans", "Men", "Blue", inr(PRICE), MEN_SIZES)
                .with_image("/img/distressed-slim-fit.jpg")
                .with_description(
                    "Edgy distressed jeans with strategic rips and fading for a \
                     modern, lived-in appearance.",
                ),
        ])
    }
}
