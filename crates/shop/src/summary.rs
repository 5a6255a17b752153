//! Cart summaries and order confirmations.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use shopcart_core::{OrderId, Price, ProductId};

use crate::cart::CartLine;

/// Price breakdown for a single cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub product_id: ProductId,
    pub title: String,
    pub quantity: u32,
    pub unit_price: Price,
    pub line_total: Price,
}

impl SummaryLine {
    /// Unit price rendered for display.
    #[must_use]
    pub fn formatted_unit_price(&self) -> String {
        self.unit_price.to_string()
    }

    /// Line total rendered for display.
    #[must_use]
    pub fn formatted_line_total(&self) -> String {
        self.line_total.to_string()
    }
}

impl From<&CartLine> for SummaryLine {
    fn from(line: &CartLine) -> Self {
        let unit_price = line.product.price();
        Self {
            product_id: line.product.id(),
            title: line.product.title().to_owned(),
            quantity: line.quantity,
            unit_price,
            line_total: unit_price.times(line.quantity),
        }
    }
}

impl fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} — {}x{} samtals {}",
            self.title, self.quantity, self.unit_price, self.line_total
        )
    }
}

/// Every cart line with its totals, plus the grand total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    pub lines: Vec<SummaryLine>,
    pub total: Price,
}

impl CartSummary {
    #[must_use]
    pub fn new(lines: Vec<SummaryLine>) -> Self {
        let total = lines.iter().map(|line| line.line_total).sum();
        Self { lines, total }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total rendered for display.
    #[must_use]
    pub fn formatted_total(&self) -> String {
        self.total.to_string()
    }
}

impl fmt::Display for CartSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Karfan er tóm.");
        }
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        write!(f, "Samtals: {}", self.total)
    }
}

/// Confirmation returned by a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub name: String,
    pub address: String,
    pub summary: CartSummary,
    pub placed_at: DateTime<Utc>,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pöntun móttekin {}.\nVörur verða sendar á {}.\n\n{}",
            self.name, self.address, self.summary
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use shopcart_core::{Product, format_product_line};

    fn line(id: u32, title: &str, price: u64, quantity: u32) -> CartLine {
        CartLine {
            product: Product::new(ProductId::new(id), title, "Lýsing", Price::new(price)).unwrap(),
            quantity,
        }
    }

    #[test]
    fn test_empty_summary() {
        let summary = CartSummary::new(Vec::new());
        assert!(summary.is_empty());
        assert_eq!(summary.total, Price::ZERO);
        assert_eq!(summary.to_string(), "Karfan er tóm.");
    }

    #[test]
    fn test_summary_totals() {
        let lines = [line(1, "HTML húfa", 5_000, 2), line(2, "CSS sokkar", 3_000, 1)];
        let summary = CartSummary::new(lines.iter().map(SummaryLine::from).collect());
        assert_eq!(summary.total, Price::new(13_000));
        assert_eq!(summary.formatted_total(), "13.000 kr.");

        let first = summary.lines.first().unwrap();
        assert_eq!(first.formatted_unit_price(), "5.000 kr.");
        assert_eq!(first.formatted_line_total(), "10.000 kr.");
    }

    #[test]
    fn test_summary_text() {
        let lines = [line(1, "HTML húfa", 5_000, 2), line(2, "CSS sokkar", 3_000, 1)];
        let summary = CartSummary::new(lines.iter().map(SummaryLine::from).collect());
        assert_eq!(
            summary.to_string(),
            "HTML húfa — 2x5.000 kr. samtals 10.000 kr.\n\
             CSS sokkar — 1x3.000 kr. samtals 3.000 kr.\n\
             Samtals: 13.000 kr."
        );
    }

    #[test]
    fn test_summary_line_matches_product_formatting() {
        let cart_line = line(3, "JavaScript jakki", 20_000, 4);
        assert_eq!(
            SummaryLine::from(&cart_line).to_string(),
            format_product_line(&cart_line.product, Some(4))
        );
    }

    #[test]
    fn test_summary_json_shape() {
        let lines = [line(1, "HTML húfa", 5_000, 2)];
        let summary = CartSummary::new(lines.iter().map(SummaryLine::from).collect());
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["total"], 10_000);
        assert_eq!(json["lines"][0]["product_id"], 1);
        assert_eq!(json["lines"][0]["quantity"], 2);
    }

    #[test]
    fn test_order_text() {
        let lines = [line(2, "CSS sokkar", 3_000, 1)];
        let order = Order {
            id: OrderId::FIRST,
            name: "Jón".to_owned(),
            address: "Einhver gata 1".to_owned(),
            summary: CartSummary::new(lines.iter().map(SummaryLine::from).collect()),
            placed_at: Utc::now(),
        };
        assert_eq!(
            order.to_string(),
            "Pöntun móttekin Jón.\nVörur verða sendar á Einhver gata 1.\n\n\
             CSS sokkar — 1x3.000 kr. samtals 3.000 kr.\nSamtals: 3.000 kr."
        );
    }
}
