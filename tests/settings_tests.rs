use rust_decimal_macros::dec;
use shipping_cost::error::ShippingError;
use shipping_cost::settings::PricingConfig;
use std::io::Write;

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn test_load_defaults_without_file() {
    let config = PricingConfig::load(None).unwrap();
    assert_eq!(config, PricingConfig::default());
}

#[test]
fn test_load_overrides_from_file() {
    let file = config_file(
        r#"
[economy]
base_fee = "4.50"

[expedited]
rate_per_pound = "15"
volumetric_divisor = 166
"#,
    );

    let config = PricingConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.economy.base_fee, dec!(4.50));
    assert_eq!(config.economy.weight_threshold, dec!(10));
    assert_eq!(config.economy.surcharge_per_pound, dec!(0.50));
    assert_eq!(config.expedited.rate_per_pound, dec!(15));
    assert_eq!(config.expedited.volumetric_divisor, dec!(166));
}

#[test]
fn test_load_rejects_zero_divisor() {
    let file = config_file("[expedited]\nvolumetric_divisor = 0\n");

    let result = PricingConfig::load(Some(file.path()));
    assert!(matches!(result, Err(ShippingError::InvalidConfig(_))));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pricing.toml");
    let result = PricingConfig::load(Some(path.as_path()));
    assert!(matches!(result, Err(ShippingError::ConfigError(_))));
}
