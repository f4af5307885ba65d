//! Domain layer: orders, costs, the pricing strategies and the ports they
//! depend on.

pub mod cost;
pub mod order;
pub mod ports;
pub mod strategies;
pub mod strategy;
