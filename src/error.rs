use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShippingError>;

#[derive(Error, Diagnostic, Debug)]
pub enum ShippingError {
    #[error("Invalid strategy selector: {0}")]
    #[diagnostic(
        code(shipping::invalid_strategy),
        help("expected one of: economy, expedited, store-pickup")
    )]
    InvalidStrategySelector(String),
    #[error("Invalid order: {0}")]
    #[diagnostic(code(shipping::invalid_order))]
    InvalidOrder(String),
    #[error("Invalid pricing configuration: {0}")]
    #[diagnostic(code(shipping::invalid_config))]
    InvalidConfig(String),
    #[error("Config error: {0}")]
    ConfigError(#[from] config::ConfigError),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
