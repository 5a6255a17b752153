//! Type-safe price representation in whole Icelandic krónur.
//!
//! The króna has no minor unit in practice, so amounts are plain integers.
//! Formatting follows the `is-IS` locale: digits grouped in threes with a
//! period and the `kr.` suffix.

use core::fmt;
use core::iter::Sum;

use serde::{Deserialize, Serialize};

use super::validation::{Field, MAX_QUANTITY, ValidationError};

/// A price in whole units of [`CurrencyCode`].
///
/// ## Examples
///
/// ```
/// use shopcart_core::Price;
///
/// let price = Price::new(123_000);
/// assert_eq!(price.to_string(), "123.000 kr.");
///
/// assert!(Price::parse("5000").is_ok());
/// assert!(Price::parse("0").is_err());
/// assert!(Price::parse("12.5").is_err());
/// assert!(Price::parse("1000000000001").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// The zero amount, used as the starting point for totals.
    pub const ZERO: Self = Self(0);

    /// The highest price a product may have.
    ///
    /// At this price a full cart line of [`MAX_QUANTITY`] units still leaves
    /// room for millions of lines before a total reaches `u64::MAX`.
    pub const MAX: Self = Self(1_000_000_000_000);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Get the amount in whole krónur.
    #[must_use]
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Parse a price entered as text.
    ///
    /// Accepts a plain base-10 integer with optional surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] if the text is blank,
    /// [`ValidationError::InvalidPrice`] if it is not an integer of at least 1
    /// and [`ValidationError::PriceTooHigh`] if it is above [`Price::MAX`].
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingField(Field::Price));
        }

        let price = match trimmed.parse::<u64>() {
            Ok(amount) if amount >= 1 => Self(amount),
            _ => return Err(ValidationError::InvalidPrice),
        };
        price.check_range()?;
        Ok(price)
    }

    /// Check that this is a price a product may carry.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPrice`] for zero and
    /// [`ValidationError::PriceTooHigh`] above [`Price::MAX`].
    pub const fn check_range(self) -> Result<(), ValidationError> {
        if self.0 < 1 {
            return Err(ValidationError::InvalidPrice);
        }
        if self.0 > Self::MAX.0 {
            return Err(ValidationError::PriceTooHigh);
        }
        Ok(())
    }

    /// The price of `quantity` units, or `None` on overflow.
    #[must_use]
    pub fn checked_times(self, quantity: u32) -> Option<Self> {
        self.0.checked_mul(u64::from(quantity)).map(Self)
    }

    /// The sum of two prices, or `None` on overflow.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(amount) => Some(Self(amount)),
            None => None,
        }
    }

    /// The price of `quantity` units.
    ///
    /// Saturates at `u64::MAX`. With prices capped at [`Price::MAX`] this only
    /// happens for quantities far beyond [`MAX_QUANTITY`]; use
    /// [`Price::checked_times`] where such quantities are possible.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        self.checked_times(quantity).unwrap_or(Self(u64::MAX))
    }

    /// Currency this price is denominated in.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        CurrencyCode::ISK
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let len = digits.len();
        let mut grouped = String::with_capacity(len + len / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }
        write!(f, "{grouped} {}", self.currency().symbol())
    }
}

/// Saturates at `u64::MAX`, like [`Price::times`].
impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, price| Self(acc.0.saturating_add(price.0)))
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

/// ISO 4217 currency codes.
///
/// Only the Icelandic króna is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    ISK,
}

impl CurrencyCode {
    /// Display suffix used by the `is-IS` locale.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::ISK => "kr.",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ISK => "ISK",
        }
    }
}
