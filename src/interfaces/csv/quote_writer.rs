use crate::application::quote::Quote;
use crate::domain::strategy::StrategyKind;
use crate::error::{Result, ShippingError};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct QuoteRow {
    strategy: StrategyKind,
    cost: Decimal,
    timestamp: NaiveDateTime,
}

impl From<&Quote> for QuoteRow {
    fn from(quote: &Quote) -> Self {
        Self {
            strategy: quote.strategy,
            cost: quote.cost.rounded(),
            timestamp: quote.ordered_at,
        }
    }
}

/// Writes priced quotes as CSV rows `strategy,cost,timestamp`, with the cost
/// rounded to cents.
pub struct QuoteWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> QuoteWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_quote(&mut self, quote: &Quote) -> Result<()> {
        self.writer.serialize(QuoteRow::from(quote))?;
        Ok(())
    }

    pub fn write_quotes<'a>(&mut self, quotes: impl IntoIterator<Item = &'a Quote>) -> Result<()> {
        for quote in quotes {
            self.write_quote(quote)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Flushes and returns the underlying sink.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| ShippingError::IoError(e.into_error()))
    }
}
