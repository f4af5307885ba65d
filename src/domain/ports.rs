use super::cost::ShippingCost;
use super::order::Order;
use super::strategy::StrategyKind;
use std::sync::Arc;

/// A pricing rule that turns an order into a shipping cost.
///
/// Implementations carry only immutable rates, so a single instance can be
/// shared across threads and called any number of times with identical results.
pub trait ShippingStrategy: Send + Sync {
    fn kind(&self) -> StrategyKind;
    fn cost(&self, order: &Order) -> ShippingCost;
}

/// Sink for the "ready for pickup" signal raised by store-pickup pricing.
///
/// Fire-and-forget: no return value and no delivery guarantee.
pub trait CustomerNotifier: Send + Sync {
    fn notify_customer_ready(&self);
}

pub type ShippingStrategyBox = Box<dyn ShippingStrategy>;
pub type NotifierHandle = Arc<dyn CustomerNotifier>;
