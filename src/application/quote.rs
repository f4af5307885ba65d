use super::calculator::ShippingCalculator;
use super::selector::StrategySelector;
use crate::domain::cost::ShippingCost;
use crate::domain::order::Order;
use crate::domain::strategy::StrategyKind;
use crate::error::Result;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A pricing request as received from outside the crate: the strategy is
/// still free text, the order has already been validated.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct QuoteRequest {
    pub strategy: String,
    pub order: Order,
}

#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
pub struct Quote {
    pub strategy: StrategyKind,
    pub cost: ShippingCost,
    pub ordered_at: NaiveDateTime,
}

/// Prices incoming requests end to end: selects the strategy named in the
/// request, wraps it in a calculator and computes the cost.
pub struct QuoteService {
    selector: StrategySelector,
}

impl QuoteService {
    pub fn new(selector: StrategySelector) -> Self {
        Self { selector }
    }

    pub fn quote(&self, request: &QuoteRequest) -> Result<Quote> {
        let strategy = self.selector.select_by_name(&request.strategy)?;
        let calculator = ShippingCalculator::new(strategy);

        Ok(Quote {
            strategy: calculator.strategy_kind(),
            cost: calculator.compute_cost(&request.order),
            ordered_at: request.order.timestamp(),
        })
    }
}
