use crate::application::quote::QuoteRequest;
use crate::domain::order::{Order, OrderRecord};
use crate::error::{Result, ShippingError};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One CSV row: `strategy,weight,height,width,length,price,timestamp`.
///
/// Decimal columns are parsed from their text; csv would otherwise infer them
/// as `f64` and round away digits.
#[derive(Debug, Deserialize)]
struct QuoteRecord {
    strategy: String,
    #[serde(with = "rust_decimal::serde::str")]
    weight: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    height: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    width: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    length: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    price: Decimal,
    timestamp: NaiveDateTime,
}

impl TryFrom<QuoteRecord> for QuoteRequest {
    type Error = ShippingError;

    fn try_from(record: QuoteRecord) -> Result<Self> {
        let order = Order::try_from(OrderRecord {
            weight: record.weight,
            height: record.height,
            width: record.width,
            length: record.length,
            price: record.price,
            timestamp: record.timestamp,
        })?;
        Ok(Self {
            strategy: record.strategy,
            order,
        })
    }
}

/// Reads quote requests from a CSV source.
///
/// Wraps `csv::Reader` and yields one `Result<QuoteRequest>` per row, so a
/// malformed or out-of-domain row does not stop the rest of the batch.
/// The strategy column is kept as text; it is validated when the request is
/// priced.
pub struct QuoteReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> QuoteReader<R> {
    /// Creates a new `QuoteReader` from any `Read` source.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and validates quote requests.
    pub fn requests(self) -> impl Iterator<Item = Result<QuoteRequest>> {
        self.reader.into_deserialize().map(|result| {
            let record: QuoteRecord = result?;
            QuoteRequest::try_from(record)
        })
    }
}
