//! Unified error handling for session operations.
//!
//! Every operation returns `Result<T, ShopError>`. Errors never leave the
//! session in a partially updated state, so the caller can simply report the
//! message and let the shopper try again.

use shopcart_core::{ProductId, ValidationError};
use thiserror::Error;

/// Error returned by catalog and cart operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopError {
    /// Input was missing, empty or out of range.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The referenced product is not in the catalog.
    #[error("Vara fannst ekki.")]
    NotFound(ProductId),

    /// Every id of the kind being assigned is already taken.
    #[error("Ekki er hægt að úthluta fleiri auðkennum.")]
    IdsExhausted,
}

impl ShopError {
    /// Short machine-readable kind, used as a structured logging field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::NotFound(_) => "not_found",
            Self::IdsExhausted => "ids_exhausted",
        }
    }
}

/// Result type alias for `ShopError`.
pub type Result<T> = std::result::Result<T, ShopError>;

#[cfg(test)]
mod tests {
    use super::*;
    use shopcart_core::Field;

    #[test]
    fn test_shop_error_display() {
        let err = ShopError::NotFound(ProductId::new(42));
        assert_eq!(err.to_string(), "Vara fannst ekki.");

        let err = ShopError::from(ValidationError::MissingField(Field::Name));
        assert_eq!(err.to_string(), "Þarf að gefa upp nafn.");
    }

    #[test]
    fn test_shop_error_kind() {
        assert_eq!(ShopError::NotFound(ProductId::new(1)).kind(), "not_found");
        assert_eq!(ShopError::IdsExhausted.kind(), "ids_exhausted");
        assert_eq!(
            ShopError::Validation(ValidationError::EmptyCart).kind(),
            "validation"
        );
    }
}
