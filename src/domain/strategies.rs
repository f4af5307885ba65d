use super::cost::ShippingCost;
use super::order::Order;
use super::ports::{NotifierHandle, ShippingStrategy};
use super::strategy::StrategyKind;
use crate::error::Result;
use crate::settings::{EconomyRates, ExpeditedRates};
use rust_decimal::Decimal;

/// Low-cost shipping: a flat base fee, plus a surcharge per pound for orders
/// heavier than the weight threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct EconomyStrategy {
    rates: EconomyRates,
}

impl EconomyStrategy {
    /// Fails with `InvalidConfig` when a rate is out of range.
    pub fn new(rates: EconomyRates) -> Result<Self> {
        rates.validate()?;
        Ok(Self { rates })
    }

    pub(crate) fn from_validated(rates: EconomyRates) -> Self {
        Self { rates }
    }
}

impl ShippingStrategy for EconomyStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Economy
    }

    fn cost(&self, order: &Order) -> ShippingCost {
        let excess = order.weight() - self.rates.weight_threshold;
        // Strictly above the threshold; a weight equal to it pays the base fee.
        let surcharge = if excess > Decimal::ZERO {
            excess * self.rates.surcharge_per_pound
        } else {
            Decimal::ZERO
        };
        ShippingCost::new(self.rates.base_fee + surcharge)
    }
}

/// Fast shipping billed on the greater of actual and volumetric weight.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpeditedStrategy {
    rates: ExpeditedRates,
}

impl ExpeditedStrategy {
    /// Fails with `InvalidConfig` when a rate is out of range.
    pub fn new(rates: ExpeditedRates) -> Result<Self> {
        rates.validate()?;
        Ok(Self { rates })
    }

    pub(crate) fn from_validated(rates: ExpeditedRates) -> Self {
        Self { rates }
    }

    pub fn volumetric_weight(&self, order: &Order) -> Decimal {
        order.volume() / self.rates.volumetric_divisor
    }

    pub fn billable_weight(&self, order: &Order) -> Decimal {
        self.volumetric_weight(order).max(order.weight())
    }
}

impl ShippingStrategy for ExpeditedStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Expedited
    }

    fn cost(&self, order: &Order) -> ShippingCost {
        ShippingCost::new(self.rates.rate_per_pound * self.billable_weight(order))
    }
}

/// The customer collects the order in person: nothing to pay, but the
/// customer is told when the order is ready.
pub struct StorePickupStrategy {
    notifier: NotifierHandle,
}

impl StorePickupStrategy {
    pub fn new(notifier: NotifierHandle) -> Self {
        Self { notifier }
    }
}

impl ShippingStrategy for StorePickupStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::StorePickup
    }

    fn cost(&self, _order: &Order) -> ShippingCost {
        self.notifier.notify_customer_ready();
        ShippingCost::ZERO
    }
}
