use crate::error::{Result, ShippingError};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// Heaviest order accepted, in pounds.
pub const MAX_WEIGHT: Decimal = dec!(1000000);
/// Longest side accepted, in inches.
pub const MAX_DIMENSION: Decimal = dec!(100000);

/// Unvalidated order fields as they arrive from an external payload.
///
/// Converted into an [`Order`] through `TryFrom`, which is where the domain
/// bounds are enforced.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct OrderRecord {
    pub weight: Decimal,
    pub height: Decimal,
    pub width: Decimal,
    pub length: Decimal,
    pub price: Decimal,
    pub timestamp: NaiveDateTime,
}

/// An order to be shipped.
///
/// Weight is in pounds, dimensions in inches. Once built an `Order` is never
/// mutated; every field is guaranteed to be within its domain:
/// weight and dimensions strictly positive and bounded by [`MAX_WEIGHT`] and
/// [`MAX_DIMENSION`], price non-negative. The bounds keep every pricing rule
/// within `Decimal` range.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(try_from = "OrderRecord")]
pub struct Order {
    weight: Decimal,
    height: Decimal,
    width: Decimal,
    length: Decimal,
    price: Decimal,
    timestamp: NaiveDateTime,
    volume: Decimal,
}

impl Order {
    pub fn new(
        weight: Decimal,
        height: Decimal,
        width: Decimal,
        length: Decimal,
        price: Decimal,
        timestamp: NaiveDateTime,
    ) -> Result<Self> {
        if price < Decimal::ZERO {
            return Err(ShippingError::InvalidOrder(format!(
                "price must not be negative, got {price}"
            )));
        }

        let weight = require_within("weight", weight, MAX_WEIGHT)?;
        let height = require_within("height", height, MAX_DIMENSION)?;
        let width = require_within("width", width, MAX_DIMENSION)?;
        let length = require_within("length", length, MAX_DIMENSION)?;

        let volume = height
            .checked_mul(width)
            .and_then(|area| area.checked_mul(length))
            .ok_or_else(|| ShippingError::InvalidOrder("volume overflows".to_string()))?;

        Ok(Self {
            weight,
            height,
            width,
            length,
            price,
            timestamp,
            volume,
        })
    }

    pub fn weight(&self) -> Decimal {
        self.weight
    }

    pub fn height(&self) -> Decimal {
        self.height
    }

    pub fn width(&self) -> Decimal {
        self.width
    }

    pub fn length(&self) -> Decimal {
        self.length
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Package volume in cubic inches.
    pub fn volume(&self) -> Decimal {
        self.volume
    }
}

impl TryFrom<OrderRecord> for Order {
    type Error = ShippingError;

    fn try_from(record: OrderRecord) -> Result<Self> {
        Self::new(
            record.weight,
            record.height,
            record.width,
            record.length,
            record.price,
            record.timestamp,
        )
    }
}

fn require_within(field: &str, value: Decimal, max: Decimal) -> Result<Decimal> {
    if value <= Decimal::ZERO {
        Err(ShippingError::InvalidOrder(format!(
            "{field} must be positive, got {value}"
        )))
    } else if value > max {
        Err(ShippingError::InvalidOrder(format!(
            "{field} must not exceed {max}, got {value}"
        )))
    } else {
        Ok(value)
    }
}
