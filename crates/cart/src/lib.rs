//! Shopping cart domain module.
//!
//! This crate contains the in-memory cart model, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage). Callers supply
//! `Product` snapshots and quantities and read back lines and totals.

pub mod cart;
pub mod config;
pub mod policy;
pub mod summary;

pub use cart::{AddOutcome, Cart, CartLine};
pub use config::{CartConfig, STOCK_POLICY_ENV};
pub use policy::StockPolicy;
pub use summary::CartSummary;
