use serde::{Deserialize, Serialize};
use tracing::debug;

use shopcart_core::{DomainError, DomainResult, Entity, OrderLineId, ProductId, find_by_id};
use shopcart_products::Product;

use crate::config::CartConfig;
use crate::policy::StockPolicy;
use crate::summary::CartSummary;

/// Cart line: product snapshot and quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    order_line_id: OrderLineId,
    product: Product,
    quantity: i64,
}

impl CartLine {
    pub fn order_line_id(&self) -> OrderLineId {
        self.order_line_id
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// `quantity * unit price`.
    pub fn line_total(&self) -> f64 {
        self.quantity as f64 * self.product.price()
    }
}

impl Entity for CartLine {
    type Id = OrderLineId;

    fn id(&self) -> &Self::Id {
        &self.order_line_id
    }
}

/// What [`Cart::add_item`] did with the request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended.
    Inserted(OrderLineId),
    /// The existing line's quantity was increased.
    Incremented(OrderLineId),
    /// The existing line was left untouched by the stock policy.
    Refused(OrderLineId),
}

impl AddOutcome {
    pub fn order_line_id(self) -> OrderLineId {
        match self {
            AddOutcome::Inserted(id) | AddOutcome::Incremented(id) | AddOutcome::Refused(id) => id,
        }
    }
}

/// In-memory shopping cart.
///
/// Lines keep insertion order and there is at most one line per product id.
/// Mutations never fail; lookups and the average return [`DomainError`]s.
///
/// The cart does no internal locking. Share it across threads behind whatever
/// synchronization the caller already uses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    config: CartConfig,
    lines: Vec<CartLine>,
    next_line_id: u64,
}

impl Cart {
    /// Create an empty cart with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cart with an explicit configuration.
    pub fn with_config(config: CartConfig) -> Self {
        Self {
            config,
            lines: Vec::new(),
            next_line_id: 0,
        }
    }

    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    pub fn stock_policy(&self) -> StockPolicy {
        self.config.stock_policy
    }

    /// Current lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn iter(&self) -> core::slice::Iter<'_, CartLine> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add `quantity` units of `product`.
    ///
    /// A product not yet in the cart gets a new line regardless of stock or
    /// the sign of `quantity`. A product already in the cart has its line
    /// incremented when the configured [`StockPolicy`] allows it.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> AddOutcome {
        let policy = self.config.stock_policy;

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.product.id() == product.id())
        {
            if !policy.allows_increment(product, line.quantity) {
                debug!(
                    product_id = %product.id(),
                    order_line_id = %line.order_line_id,
                    quantity,
                    current = line.quantity,
                    stock = product.stock(),
                    %policy,
                    "increment refused by stock policy"
                );
                return AddOutcome::Refused(line.order_line_id);
            }

            line.quantity = line.quantity.saturating_add(quantity);
            debug!(
                product_id = %product.id(),
                order_line_id = %line.order_line_id,
                quantity,
                new_quantity = line.quantity,
                "cart line incremented"
            );
            return AddOutcome::Incremented(line.order_line_id);
        }

        let order_line_id = OrderLineId::new(self.next_line_id);
        self.next_line_id += 1;
        self.lines.push(CartLine {
            order_line_id,
            product: product.clone(),
            quantity,
        });
        debug!(
            product_id = %product.id(),
            %order_line_id,
            quantity,
            "cart line added"
        );

        AddOutcome::Inserted(order_line_id)
    }

    /// Remove the line holding `product`, if any.
    pub fn remove_line(&mut self, product: &Product) {
        let before = self.lines.len();
        self.lines.retain(|l| l.product.id() != product.id());
        debug!(
            product_id = %product.id(),
            removed = before - self.lines.len(),
            "cart line removed"
        );
    }

    /// Empty the cart. Line ids start over from zero afterwards.
    pub fn clear(&mut self) {
        debug!(lines = self.lines.len(), "cart cleared");
        self.lines.clear();
        self.next_line_id = 0;
    }

    /// Sum of `quantity * price` over all lines.
    pub fn total_value(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Exact sum of line quantities; cannot overflow for any realistic line count.
    fn unit_sum(&self) -> i128 {
        self.lines.iter().map(|l| i128::from(l.quantity)).sum()
    }

    /// Sum of all line quantities, clamped to the `i64` range.
    pub fn total_quantity(&self) -> i64 {
        let units = self.unit_sum().clamp(i128::from(i64::MIN), i128::from(i64::MAX));
        units as i64
    }

    /// Total value per unit in the cart.
    ///
    /// Fails with [`DomainError::EmptyCart`] when the quantities sum to zero,
    /// which includes the empty cart.
    pub fn average_value(&self) -> DomainResult<f64> {
        let units = self.unit_sum();
        if units == 0 {
            return Err(DomainError::EmptyCart);
        }
        Ok(self.total_value() / units as f64)
    }

    /// Product held by the line for `product_id`.
    pub fn find_product(&self, product_id: ProductId) -> DomainResult<&Product> {
        self.lines
            .iter()
            .find(|l| l.product.id() == product_id)
            .map(|l| &l.product)
            .ok_or_else(|| DomainError::not_found(format!("product {product_id} in cart")))
    }

    /// Line carrying `order_line_id`, wherever it sits in the sequence.
    pub fn line_by_id(&self, order_line_id: OrderLineId) -> DomainResult<&CartLine> {
        find_by_id(&self.lines, &order_line_id)
            .ok_or_else(|| DomainError::not_found(format!("cart line {order_line_id}")))
    }

    /// Line at `index` in iteration order.
    pub fn line_at(&self, index: usize) -> DomainResult<&CartLine> {
        self.lines
            .get(index)
            .ok_or_else(|| DomainError::out_of_range(index, self.lines.len()))
    }

    /// Snapshot of lines and totals for display or checkout.
    pub fn summary(&self) -> CartSummary {
        CartSummary::from(self)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartLine;
    type IntoIter = core::slice::Iter<'a, CartLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
