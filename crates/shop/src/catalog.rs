//! Product catalog.
//!
//! The catalog keeps products in insertion order and hands out ids from a
//! counter that only moves forward. The next id is always one past the
//! highest id ever seen, regardless of how many products are present. Once
//! `u32::MAX` has been used no further products can be created.

use serde::Serialize;
use shopcart_core::{Price, Product, ProductId};
use thiserror::Error;

use crate::error::{Result, ShopError};

/// Errors that can occur when building a catalog from seed products.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two seed products share an id.
    #[error("duplicate product id {0} in catalog")]
    DuplicateId(ProductId),
}

/// An ordered collection of products with a monotonic id counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    products: Vec<Product>,
    #[serde(skip)]
    next_id: Option<ProductId>,
}

impl Catalog {
    /// An empty catalog whose first product gets id 1.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            products: Vec::new(),
            next_id: Some(ProductId::FIRST),
        }
    }

    /// Build a catalog from already-validated products.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two products share an id.
    pub fn from_products(products: Vec<Product>) -> std::result::Result<Self, CatalogError> {
        let mut catalog = Self::empty();
        let mut highest = None;
        for product in products {
            if catalog.get(product.id()).is_some() {
                return Err(CatalogError::DuplicateId(product.id()));
            }
            highest = highest.max(Some(product.id()));
            catalog.products.push(product);
        }
        catalog.next_id = highest.map_or(Some(ProductId::FIRST), ProductId::next);
        Ok(catalog)
    }

    /// The catalog a fresh session starts with.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        for (title, description, price) in BUILTIN_PRODUCTS {
            if let Err(e) = catalog.insert(title, description, Price::new(*price)) {
                tracing::error!(title, error = %e, "Invalid built-in product");
            }
        }
        catalog
    }

    /// Products in insertion order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The id the next inserted product will receive, `None` once ids are
    /// used up.
    #[must_use]
    pub const fn next_id(&self) -> Option<ProductId> {
        self.next_id
    }

    /// Create a product with the next id and append it.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Validation`] if the fields do not form a valid
    /// product and [`ShopError::IdsExhausted`] if no id is left. The catalog
    /// is unchanged in both cases.
    pub fn insert(&mut self, title: &str, description: &str, price: Price) -> Result<Product> {
        let id = self.next_id.ok_or(ShopError::IdsExhausted)?;
        let product = Product::new(id, title, description, price)?;
        self.next_id = id.next();
        self.products.push(product.clone());
        Ok(product)
    }

    /// Lines for display, one per product: `#id title — price`.
    pub fn listing(&self) -> impl Iterator<Item = String> + '_ {
        self.products
            .iter()
            .map(|product| format!("#{} {product}", product.id()))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

const BUILTIN_PRODUCTS: &[(&str, &str, u64)] = &[
    (
        "HTML húfa",
        "Húfa sem heldur hausnum heitum og hvíslar hugsanlega að þér hvaða element væri best að nota.",
        5_000,
    ),
    (
        "CSS sokkar",
        "Sokkar sem skalast vel með hvaða fótum sem er.",
        3_000,
    ),
    (
        "JavaScript jakki",
        "Mjög töff jakki fyrir öll sem skrifa JavaScript reglulega.",
        20_000,
    ),
];
