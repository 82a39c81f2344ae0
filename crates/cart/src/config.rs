//! Cart configuration.

use shopcart_core::DomainResult;

use crate::policy::StockPolicy;

/// Environment variable selecting the [`StockPolicy`].
pub const STOCK_POLICY_ENV: &str = "SHOPCART_STOCK_POLICY";

/// Cart configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartConfig {
    /// Policy applied when a product already in the cart is added again.
    pub stock_policy: StockPolicy,
}

impl CartConfig {
    pub fn with_stock_policy(mut self, policy: StockPolicy) -> Self {
        self.stock_policy = policy;
        self
    }

    /// Build a configuration from the process environment.
    ///
    /// Unset or blank variables keep their defaults; unparseable values are an
    /// error rather than a silent fallback.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Same as [`CartConfig::from_env`], reading variables through `lookup`.
    pub fn from_env_with<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(STOCK_POLICY_ENV).filter(|v| !v.trim().is_empty()) {
            config.stock_policy = raw.parse()?;
        }

        Ok(config)
    }
}
