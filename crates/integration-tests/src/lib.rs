//! Integration tests for shopcart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopcart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_operations` - Adding and listing products, seed catalogs
//! - `cart_operations` - Adding to the cart, quantity policies, summaries
//! - `checkout` - Checkout validation and order confirmations
//! - `prompt_flows` - End-to-end scripted sessions

use shopcart::{Catalog, Session, SessionOptions};
use shopcart_core::{Price, Product, ProductId};

/// A product with the given id and price and placeholder text.
///
/// # Panics
///
/// Panics if `id` or `price` is zero.
#[must_use]
pub fn product(id: u32, title: &str, price: u64) -> Product {
    Product::new(
        ProductId::new(id),
        title,
        "Lýsing á vöru.",
        Price::new(price),
    )
    .expect("test product should be valid")
}

/// A session seeded with `{1: 5000}` and `{2: 3000}`.
///
/// # Panics
///
/// Panics if the seed catalog is invalid.
#[must_use]
pub fn two_product_session(options: SessionOptions) -> Session {
    let seed = Catalog::from_products(vec![
        product(1, "HTML húfa", 5_000),
        product(2, "CSS sokkar", 3_000),
    ])
    .expect("seed catalog should be valid");
    Session::with_catalog(seed, options)
}
