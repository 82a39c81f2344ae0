//! Read-only cart snapshot for presentation and checkout layers.

use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartLine};

/// Lines plus derived totals, captured at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub total_quantity: i64,
    pub total_value: f64,
    /// `None` when the cart holds no units.
    pub average_value: Option<f64>,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.lines().to_vec(),
            total_quantity: cart.total_quantity(),
            total_value: cart.total_value(),
            average_value: cart.average_value().ok(),
        }
    }
}
