//! JSON payload boundary, e.g. a checkout form posting the chosen shipping
//! method together with the order.

use crate::application::quote::QuoteRequest;
use crate::error::Result;
use std::io::Read;

pub fn parse_quote_request(payload: &str) -> Result<QuoteRequest> {
    Ok(serde_json::from_str(payload)?)
}

pub fn read_quote_request<R: Read>(source: R) -> Result<QuoteRequest> {
    Ok(serde_json::from_reader(source)?)
}
