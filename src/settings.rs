use crate::error::{Result, ShippingError};
use config::{Config, Environment, File};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::path::Path;

/// Upper bound for any fee, rate or threshold. Together with the order bounds
/// it keeps every cost within `Decimal` range.
pub const MAX_RATE: Decimal = dec!(1000000);

/// Rates for economy pricing: a flat base fee plus a per-pound surcharge on
/// the weight above `weight_threshold`.
#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(default)]
pub struct EconomyRates {
    pub base_fee: Decimal,
    pub weight_threshold: Decimal,
    pub surcharge_per_pound: Decimal,
}

impl EconomyRates {
    pub fn validate(&self) -> Result<()> {
        require_rate("economy.base_fee", self.base_fee)?;
        require_rate("economy.weight_threshold", self.weight_threshold)?;
        require_rate("economy.surcharge_per_pound", self.surcharge_per_pound)
    }
}

impl Default for EconomyRates {
    fn default() -> Self {
        Self {
            base_fee: dec!(5.00),
            weight_threshold: dec!(10),
            surcharge_per_pound: dec!(0.50),
        }
    }
}

/// Rates for expedited pricing, billed on the greater of actual and
/// volumetric weight.
#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(default)]
pub struct ExpeditedRates {
    pub rate_per_pound: Decimal,
    /// Cubic inches per pound used to derive volumetric weight.
    pub volumetric_divisor: Decimal,
}

impl ExpeditedRates {
    pub fn validate(&self) -> Result<()> {
        require_rate("expedited.rate_per_pound", self.rate_per_pound)?;
        if self.volumetric_divisor < Decimal::ONE {
            return Err(invalid(format!(
                "expedited.volumetric_divisor must be at least 1, got {}",
                self.volumetric_divisor
            )));
        }
        Ok(())
    }
}

impl Default for ExpeditedRates {
    fn default() -> Self {
        Self {
            rate_per_pound: dec!(12.00),
            volumetric_divisor: dec!(139),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq, Clone, Copy, Default)]
#[serde(default)]
pub struct PricingConfig {
    pub economy: EconomyRates,
    pub expedited: ExpeditedRates,
}

impl PricingConfig {
    /// Loads pricing rates.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables prefixed with `SHIPPING`, `__` separated
    ///    (e.g. `SHIPPING__EXPEDITED__RATE_PER_POUND=15`)
    /// 2. The configuration file at `path`, when given
    /// 3. Built-in defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("SHIPPING")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.economy.validate()?;
        self.expedited.validate()
    }
}

fn require_rate(field: &str, value: Decimal) -> Result<()> {
    if value < Decimal::ZERO || value > MAX_RATE {
        return Err(invalid(format!(
            "{field} must be between 0 and {MAX_RATE}, got {value}"
        )));
    }
    Ok(())
}

fn invalid(message: String) -> ShippingError {
    ShippingError::InvalidConfig(message)
}
