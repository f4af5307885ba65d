use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;
use std::ops::Add;

/// A shipping cost, the only output of a pricing strategy.
///
/// Wraps `rust_decimal::Decimal` so costs keep full precision through the
/// pricing arithmetic. Rounding to cents happens only when a cost is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct ShippingCost(Decimal);

impl ShippingCost {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// The cost rounded to cents, midpoint away from zero, always with two
    /// decimal places.
    pub fn rounded(&self) -> Decimal {
        let mut cents = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        cents.rescale(2);
        cents
    }
}

impl From<ShippingCost> for Decimal {
    fn from(cost: ShippingCost) -> Self {
        cost.0
    }
}

impl From<Decimal> for ShippingCost {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for ShippingCost {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl fmt::Display for ShippingCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rounded())
    }
}
