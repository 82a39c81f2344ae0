use serde::{Deserialize, Serialize};

use shopcart_core::ProductId;

/// Catalog product snapshot supplied by callers.
///
/// Compared by value; immutable from the cart's perspective, since fields are
/// only readable and the cart keeps its own clone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    /// Unit price.
    price: f64,
    /// Available quantity.
    stock: i64,
}

impl Product {
    pub fn new(id: ProductId, price: f64, stock: i64) -> Self {
        Self {
            id,
            price,
            stock,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: f64, stock: i64) -> Product {
        Product::new(ProductId::new(id), price, stock)
    }

    #[test]
    fn products_compare_by_value() {
        let a = product(1, 9.5, 3);
        let b = product(1, 9.5, 3);
        assert_eq!(a, b);
        assert_ne!(a, product(1, 9.5, 4));
    }

    #[test]
    fn out_of_stock_when_stock_not_positive() {
        assert!(product(1, 1.0, 1).in_stock());
        assert!(!product(1, 1.0, 0).in_stock());
        assert!(!product(1, 1.0, -2).in_stock());
    }

    #[test]
    fn json_shape_uses_plain_id() {
        let json = serde_json::to_value(product(5, 2.5, 10)).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 5, "price": 2.5, "stock": 10 }));
    }
}
