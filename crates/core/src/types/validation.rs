//! Validation errors for user-supplied input.
//!
//! The `Display` text of every error is the message shown to the shopper.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::price::Price;

/// Smallest quantity that can be added to a cart in one go.
pub const MIN_QUANTITY: u32 = 1;

/// Largest quantity that can be added to a cart in one go.
pub const MAX_QUANTITY: u32 = 99;

/// An input field the shopper is prompted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Title,
    Description,
    Price,
    ProductId,
    Quantity,
    Name,
    Address,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::Description => write!(f, "description"),
            Self::Price => write!(f, "price"),
            Self::ProductId => write!(f, "product_id"),
            Self::Quantity => write!(f, "quantity"),
            Self::Name => write!(f, "name"),
            Self::Address => write!(f, "address"),
        }
    }
}

/// Missing, empty or out-of-range input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty or not supplied.
    #[error("{}", missing_message(.0))]
    MissingField(Field),
    /// The price is not a positive integer.
    #[error("Verð verður að vera jákvæð heiltala.")]
    InvalidPrice,
    /// The price is above [`Price::MAX`].
    #[error("Verð má ekki vera hærra en {}.", Price::MAX)]
    PriceTooHigh,
    /// The product id is not a positive integer.
    #[error("Auðkenni vöru verður að vera jákvæð heiltala.")]
    InvalidProductId,
    /// The quantity is not an integer within bounds.
    #[error("Fjöldi er ekki löglegur, lágmark {min} og hámark {max}.")]
    QuantityOutOfRange {
        /// Smallest allowed quantity.
        min: u32,
        /// Largest allowed quantity.
        max: u32,
    },
    /// Checkout was attempted with no lines in the cart.
    #[error("Karfan er tóm.")]
    EmptyCart,
    /// The cart total would no longer fit in a [`Price`].
    #[error("Heildarupphæð körfunnar er of há.")]
    CartTotalTooLarge,
}

impl ValidationError {
    /// The quantity error with the standard bounds.
    #[must_use]
    pub const fn quantity_out_of_range() -> Self {
        Self::QuantityOutOfRange {
            min: MIN_QUANTITY,
            max: MAX_QUANTITY,
        }
    }

    /// The field this error is about, if any.
    #[must_use]
    pub const fn field(&self) -> Option<Field> {
        match self {
            Self::MissingField(field) => Some(*field),
            Self::InvalidPrice | Self::PriceTooHigh => Some(Field::Price),
            Self::InvalidProductId => Some(Field::ProductId),
            Self::QuantityOutOfRange { .. } => Some(Field::Quantity),
            Self::EmptyCart | Self::CartTotalTooLarge => None,
        }
    }
}

const fn missing_message(field: &Field) -> &'static str {
    match *field {
        Field::Title => "Titill má ekki vera tómur.",
        Field::Description => "Lýsing má ekki vera tóm.",
        Field::Price => "Verð má ekki vera tómt.",
        Field::ProductId => "Auðkenni vöru má ekki vera tómt.",
        Field::Quantity => "Fjöldi má ekki vera tómur.",
        Field::Name => "Þarf að gefa upp nafn.",
        Field::Address => "Þarf að gefa upp heimilisfang.",
    }
}

/// Return the trimmed value of a required text field.
///
/// # Errors
///
/// Returns [`ValidationError::MissingField`] if the value is absent or blank.
pub fn require_text(value: Option<&str>, field: Field) -> Result<&str, ValidationError> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(ValidationError::MissingField(field)),
    }
}

/// Parse a per-operation quantity and check it is within bounds.
///
/// # Errors
///
/// Returns [`ValidationError::QuantityOutOfRange`] for anything that is not an
/// integer between [`MIN_QUANTITY`] and [`MAX_QUANTITY`].
pub fn parse_quantity(text: &str) -> Result<u32, ValidationError> {
    text.trim()
        .parse::<u32>()
        .ok()
        .filter(|quantity| (MIN_QUANTITY..=MAX_QUANTITY).contains(quantity))
        .ok_or_else(ValidationError::quantity_out_of_range)
}
