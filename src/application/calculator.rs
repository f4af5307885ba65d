use crate::domain::cost::ShippingCost;
use crate::domain::order::Order;
use crate::domain::ports::ShippingStrategyBox;
use crate::domain::strategy::StrategyKind;
use tracing::debug;

/// Prices orders with one fixed strategy.
///
/// The strategy is chosen at construction and never replaced; pricing with a
/// different strategy means building a new calculator.
pub struct ShippingCalculator {
    strategy: ShippingStrategyBox,
}

impl ShippingCalculator {
    pub fn new(strategy: ShippingStrategyBox) -> Self {
        Self { strategy }
    }

    pub fn strategy_kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    /// Computes the shipping cost of `order` with the held strategy.
    pub fn compute_cost(&self, order: &Order) -> ShippingCost {
        let cost = self.strategy.cost(order);
        debug!(strategy = %self.strategy.kind(), %cost, "computed shipping cost");
        cost
    }
}
