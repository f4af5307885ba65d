use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use shipping_cost::domain::order::Order;

pub fn placed_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap()
}

pub fn order(
    weight: Decimal,
    height: Decimal,
    width: Decimal,
    length: Decimal,
    price: Decimal,
) -> Order {
    Order::new(weight, height, width, length, price, placed_at()).expect("valid test order")
}

/// An order shaped as a cube with side `side` inches.
pub fn cube_order(weight: Decimal, side: Decimal) -> Order {
    order(weight, side, side, side, Decimal::ONE_HUNDRED)
}
