//! Catalog product type.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;
use super::validation::{Field, ValidationError, require_text};

/// A purchasable product.
///
/// Products are immutable once created. Construction always validates, both
/// through [`Product::new`] and through deserialization.
///
/// ## Constraints
///
/// - `id` is a positive integer
/// - `title` and `description` are non-empty (surrounding whitespace is trimmed)
/// - `price` is between 1 and [`Price::MAX`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    id: ProductId,
    title: String,
    description: String,
    price: Price,
}

impl Product {
    /// Create a validated product.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, checking id, title,
    /// description and price in that order.
    pub fn new(
        id: ProductId,
        title: &str,
        description: &str,
        price: Price,
    ) -> Result<Self, ValidationError> {
        if !id.is_valid() {
            return Err(ValidationError::InvalidProductId);
        }
        let title = require_text(Some(title), Field::Title)?;
        let description = require_text(Some(description), Field::Description)?;
        price.check_range()?;

        Ok(Self {
            id,
            title: title.to_owned(),
            description: description.to_owned(),
            price,
        })
    }

    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} — {}", self.title, self.price)
    }
}

/// Unvalidated product fields, as found in seed files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub price: u64,
}

impl TryFrom<ProductRecord> for Product {
    type Error = ValidationError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Self::new(
            ProductId::new(record.id),
            &record.title,
            &record.description,
            Price::new(record.price),
        )
    }
}

/// Render a product for display.
///
/// Without a quantity this is `title — unit price`. With a quantity it also
/// shows the multiplier and the line total.
///
/// ```
/// use shopcart_core::{Price, Product, ProductId, format_product_line};
///
/// let hat = Product::new(ProductId::new(1), "HTML húfa", "Hlý húfa", Price::new(5_000)).unwrap();
/// assert_eq!(format_product_line(&hat, None), "HTML húfa — 5.000 kr.");
/// assert_eq!(
///     format_product_line(&hat, Some(2)),
///     "HTML húfa — 2x5.000 kr. samtals 10.000 kr."
/// );
/// ```
#[must_use]
pub fn format_product_line(product: &Product, quantity: Option<u32>) -> String {
    match quantity {
        Some(quantity) => format!(
            "{} — {quantity}x{} samtals {}",
            product.title,
            product.price,
            product.price.times(quantity)
        ),
        None => product.to_string(),
    }
}
