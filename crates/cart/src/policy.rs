//! Stock policy applied when a product already in the cart is added again.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use shopcart_core::DomainError;
use shopcart_products::Product;

/// Whether re-adding a product is limited by its available stock.
///
/// A product's first insertion is never checked against stock under either
/// policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockPolicy {
    /// Every re-add increments the existing line.
    Unchecked,
    /// A re-add increments only while the product is in stock and the line
    /// quantity is still below that stock. Otherwise the re-add is ignored.
    #[default]
    Gated,
}

impl StockPolicy {
    /// Decide whether a line currently holding `current` units of `product`
    /// may be incremented.
    pub fn allows_increment(self, product: &Product, current: i64) -> bool {
        match self {
            StockPolicy::Unchecked => true,
            StockPolicy::Gated => product.in_stock() && current < product.stock(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StockPolicy::Unchecked => "unchecked",
            StockPolicy::Gated => "gated",
        }
    }
}

impl core::fmt::Display for StockPolicy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unchecked" => Ok(StockPolicy::Unchecked),
            "gated" => Ok(StockPolicy::Gated),
            other => Err(DomainError::validation(format!(
                "unknown stock policy `{other}` (expected `unchecked` or `gated`)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopcart_core::ProductId;

    fn product(stock: i64) -> Product {
        Product::new(ProductId::new(1), 4.0, stock)
    }

    #[test]
    fn unchecked_always_allows() {
        assert!(StockPolicy::Unchecked.allows_increment(&product(0), 100));
        assert!(StockPolicy::Unchecked.allows_increment(&product(-1), 0));
    }

    #[test]
    fn gated_requires_stock_above_current_quantity() {
        assert!(StockPolicy::Gated.allows_increment(&product(5), 4));
        assert!(!StockPolicy::Gated.allows_increment(&product(5), 5));
        assert!(!StockPolicy::Gated.allows_increment(&product(0), 0));
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(" Gated ".parse::<StockPolicy>().unwrap(), StockPolicy::Gated);
        assert_eq!("UNCHECKED".parse::<StockPolicy>().unwrap(), StockPolicy::Unchecked);
        assert_eq!(StockPolicy::Gated.to_string(), "gated");
    }

    #[test]
    fn rejects_unknown_policy() {
        let err = "strict".parse::<StockPolicy>().unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("strict") => {}
            other => panic!("Expected Validation, got {other:?}"),
        }
    }
}
