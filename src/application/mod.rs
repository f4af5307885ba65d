//! Application layer containing the pricing orchestration.
//!
//! The `StrategySelector` turns a strategy identifier into a strategy, the
//! `ShippingCalculator` prices orders with the strategy it holds, and the
//! `QuoteService` runs both for a request coming from outside the crate.

pub mod calculator;
pub mod quote;
pub mod selector;
