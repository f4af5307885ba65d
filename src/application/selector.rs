use crate::domain::ports::{NotifierHandle, ShippingStrategyBox};
use crate::domain::strategies::{EconomyStrategy, ExpeditedStrategy, StorePickupStrategy};
use crate::domain::strategy::StrategyKind;
use crate::error::Result;
use crate::settings::PricingConfig;
use tracing::{debug, warn};

/// Builds pricing strategies from a strategy identifier.
///
/// Every call returns a fresh instance. Strategies hold no mutable state, so
/// callers should not rely on instance identity either way.
pub struct StrategySelector {
    config: PricingConfig,
    notifier: NotifierHandle,
}

impl StrategySelector {
    /// Creates a selector with the standard rates.
    ///
    /// # Arguments
    ///
    /// * `notifier` - Receives the signal raised by store-pickup pricing.
    pub fn new(notifier: NotifierHandle) -> Self {
        Self {
            config: PricingConfig::default(),
            notifier,
        }
    }

    /// Creates a selector with custom rates.
    ///
    /// Fails with `InvalidConfig` when the rates do not pass
    /// [`PricingConfig::validate`].
    pub fn with_config(config: PricingConfig, notifier: NotifierHandle) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, notifier })
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    pub fn select(&self, kind: StrategyKind) -> ShippingStrategyBox {
        debug!(strategy = %kind, "selecting shipping strategy");
        match kind {
            StrategyKind::Economy => Box::new(EconomyStrategy::from_validated(self.config.economy)),
            StrategyKind::Expedited => {
                Box::new(ExpeditedStrategy::from_validated(self.config.expedited))
            }
            StrategyKind::StorePickup => Box::new(StorePickupStrategy::new(self.notifier.clone())),
        }
    }

    /// Selects a strategy from untrusted text.
    ///
    /// Fails with `InvalidStrategySelector` when the name is not one of the
    /// known strategies.
    pub fn select_by_name(&self, name: &str) -> Result<ShippingStrategyBox> {
        let kind = name.parse::<StrategyKind>().inspect_err(|_| {
            warn!(selector = name, "rejected unknown shipping strategy");
        })?;
        Ok(self.select(kind))
    }
}
