//! Products as the cart sees them.
//!
//! The catalog that owns products lives elsewhere; this crate only models the
//! snapshot a caller hands to the cart (identity, unit price, available stock).

pub mod product;

pub use product::Product;
