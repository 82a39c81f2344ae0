//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only lookups and derived figures fail; cart mutations never report errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. an unknown configuration value).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A requested element is not present.
    #[error("not found: {0}")]
    NotFound(String),

    /// A positional lookup fell outside `[0, len)`.
    #[error("index {index} out of range for {len} line(s)")]
    OutOfRange { index: usize, len: usize },

    /// A per-unit figure was requested while the cart holds no units.
    #[error("cart holds no units")]
    EmptyCart,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        assert_eq!(
            DomainError::out_of_range(3, 2).to_string(),
            "index 3 out of range for 2 line(s)"
        );
        assert_eq!(
            DomainError::not_found("product 7").to_string(),
            "not found: product 7"
        );
        assert_eq!(DomainError::EmptyCart.to_string(), "cart holds no units");
    }
}
