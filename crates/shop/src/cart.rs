//! Shopping cart.
//!
//! A cart holds at most one line per product, in the order products were
//! first added, plus the buyer identity recorded at checkout.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use shopcart_core::{MAX_QUANTITY, Price, Product, ProductId};

use crate::summary::{CartSummary, SummaryLine};

/// How repeated additions of the same product combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityPolicy {
    /// The stored quantity never exceeds [`MAX_QUANTITY`].
    #[default]
    Clamp,
    /// Quantities accumulate without an upper bound.
    Unbounded,
}

impl QuantityPolicy {
    /// Combine an existing quantity with an added one.
    #[must_use]
    pub const fn combine(self, current: u32, added: u32) -> u32 {
        let total = current.saturating_add(added);
        match self {
            Self::Clamp if total > MAX_QUANTITY => MAX_QUANTITY,
            Self::Clamp | Self::Unbounded => total,
        }
    }
}

impl fmt::Display for QuantityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clamp => write!(f, "clamp"),
            Self::Unbounded => write!(f, "unbounded"),
        }
    }
}

impl FromStr for QuantityPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp" => Ok(Self::Clamp),
            "unbounded" => Ok(Self::Unbounded),
            _ => Err(format!("invalid quantity policy: {s}")),
        }
    }
}

/// One product's quantity within the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

/// The shopper's in-progress order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    name: Option<String>,
    address: Option<String>,
}

impl Cart {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            name: None,
            address: None,
        }
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line for a product, if it is in the cart.
    #[must_use]
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product.id() == id)
    }

    /// Buyer name recorded at checkout.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Shipping address recorded at checkout.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Add `quantity` of a product, merging with an existing line.
    ///
    /// The caller is responsible for validating the per-call quantity.
    /// Returns the resulting line.
    pub fn add(&mut self, product: &Product, quantity: u32, policy: QuantityPolicy) -> CartLine {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product.id() == product.id())
        {
            line.quantity = policy.combine(line.quantity, quantity);
            return line.clone();
        }

        let line = CartLine {
            product: product.clone(),
            quantity: policy.combine(0, quantity),
        };
        self.lines.push(line.clone());
        line
    }

    /// Record the buyer identity, replacing any earlier values.
    pub fn set_buyer(&mut self, name: &str, address: &str) {
        self.name = Some(name.to_owned());
        self.address = Some(address.to_owned());
    }

    /// Sum of every line total, or `None` if it does not fit in a [`Price`].
    #[must_use]
    pub fn checked_total(&self) -> Option<Price> {
        self.lines.iter().try_fold(Price::ZERO, |total, line| {
            total.checked_add(line.product.price().checked_times(line.quantity)?)
        })
    }

    /// Price breakdown for every line plus the total.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary::new(self.lines.iter().map(SummaryLine::from).collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: u32, price: u64) -> Product {
        Product::new(ProductId::new(id), "Vara", "Lýsing", Price::new(price)).unwrap()
    }

    #[test]
    fn test_add_new_line() {
        let mut cart = Cart::new();
        let line = cart.add(&product(1, 5_000), 2, QuantityPolicy::Clamp);
        assert_eq!(line.quantity, 2);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_add_same_product_merges() {
        let mut cart = Cart::new();
        let hat = product(1, 5_000);
        cart.add(&hat, 2, QuantityPolicy::Clamp);
        cart.add(&product(2, 3_000), 1, QuantityPolicy::Clamp);
        let line = cart.add(&hat, 3, QuantityPolicy::Clamp);
        assert_eq!(line.quantity, 5);
        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines().first().unwrap().product.id(), ProductId::new(1));
    }

    #[test]
    fn test_clamp_policy_caps_total() {
        let mut cart = Cart::new();
        let hat = product(1, 5_000);
        cart.add(&hat, 60, QuantityPolicy::Clamp);
        let line = cart.add(&hat, 60, QuantityPolicy::Clamp);
        assert_eq!(line.quantity, MAX_QUANTITY);
    }

    #[test]
    fn test_unbounded_policy_accumulates() {
        let mut cart = Cart::new();
        let hat = product(1, 5_000);
        cart.add(&hat, 60, QuantityPolicy::Unbounded);
        let line = cart.add(&hat, 60, QuantityPolicy::Unbounded);
        assert_eq!(line.quantity, 120);
    }

    #[test]
    fn test_checked_total() {
        let mut cart = Cart::new();
        assert_eq!(cart.checked_total(), Some(Price::ZERO));

        cart.add(&product(1, 5_000), 2, QuantityPolicy::Clamp);
        cart.add(&product(2, 3_000), 1, QuantityPolicy::Clamp);
        assert_eq!(cart.checked_total(), Some(Price::new(13_000)));
        assert_eq!(cart.checked_total(), Some(cart.summary().total));
    }

    #[test]
    fn test_checked_total_overflow() {
        let mut cart = Cart::new();
        cart.add(&product(1, Price::MAX.amount()), u32::MAX, QuantityPolicy::Unbounded);
        assert_eq!(cart.checked_total(), None);
    }

    #[test]
    fn test_set_buyer_overwrites() {
        let mut cart = Cart::new();
        cart.set_buyer("Jón", "Einhver gata 1");
        cart.set_buyer("Anna", "Önnur gata 2");
        assert_eq!(cart.name(), Some("Anna"));
        assert_eq!(cart.address(), Some("Önnur gata 2"));
    }

    #[test]
    fn test_quantity_policy_from_str() {
        assert_eq!("clamp".parse::<QuantityPolicy>().unwrap(), QuantityPolicy::Clamp);
        assert_eq!(
            " Unbounded ".parse::<QuantityPolicy>().unwrap(),
            QuantityPolicy::Unbounded
        );
        assert!("sometimes".parse::<QuantityPolicy>().is_err());
    }
}
