use crate::error::ShippingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of pricing strategies.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum StrategyKind {
    Economy,
    Expedited,
    StorePickup,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [Self::Economy, Self::Expedited, Self::StorePickup];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Economy => "economy",
            Self::Expedited => "expedited",
            Self::StorePickup => "store-pickup",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = ShippingError;

    /// Only the exact names `economy`, `expedited` and `store-pickup` are
    /// accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "economy" => Ok(Self::Economy),
            "expedited" => Ok(Self::Expedited),
            "store-pickup" => Ok(Self::StorePickup),
            _ => Err(ShippingError::InvalidStrategySelector(s.to_string())),
        }
    }
}

impl TryFrom<String> for StrategyKind {
    type Error = ShippingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
