//! Strongly-typed identifiers used across the domain.

use serde::{Deserialize, Serialize};

/// Identifier of a catalog product, assigned by whoever owns the catalog.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

/// Identifier of a line within a single cart.
///
/// Assigned from a per-cart counter: ids are not reused while the cart lives,
/// but they carry no positional meaning.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderLineId(u64);

macro_rules! impl_int_newtype {
    ($t:ty, $inner:ty) => {
        impl $t {
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            pub const fn get(self) -> $inner {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

impl_int_newtype!(ProductId, i64);
impl_int_newtype!(OrderLineId, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_inner_value() {
        assert_eq!(ProductId::new(42).to_string(), "42");
        assert_eq!(OrderLineId::new(0).to_string(), "0");
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&ProductId::new(7)).unwrap();
        assert_eq!(json, "7");
        let back: OrderLineId = serde_json::from_str("3").unwrap();
        assert_eq!(back.get(), 3);
    }
}
