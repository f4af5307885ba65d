mod common;

use common::cube_order;
use rust_decimal_macros::dec;
use shipping_cost::application::calculator::ShippingCalculator;
use shipping_cost::domain::ports::{NotifierHandle, ShippingStrategyBox};
use shipping_cost::domain::strategies::{EconomyStrategy, ExpeditedStrategy, StorePickupStrategy};
use shipping_cost::infrastructure::in_memory::RecordingNotifier;
use std::sync::Arc;
use std::thread;

#[test]
fn test_strategies_as_trait_objects() {
    let notifier = RecordingNotifier::new();
    let handle: NotifierHandle = Arc::new(notifier.clone());

    let strategies: Vec<ShippingStrategyBox> = vec![
        Box::new(EconomyStrategy::default()),
        Box::new(ExpeditedStrategy::default()),
        Box::new(StorePickupStrategy::new(handle)),
    ];

    let order = cube_order(dec!(15), dec!(12));
    let costs: Vec<_> = strategies.iter().map(|s| s.cost(&order).value()).collect();

    assert_eq!(costs, vec![dec!(7.50), dec!(180.00), dec!(0)]);
    assert_eq!(notifier.count(), 1);
}

#[test]
fn test_calculators_on_independent_threads() {
    let notifier = RecordingNotifier::new();
    let handle: NotifierHandle = Arc::new(notifier.clone());

    let economy = ShippingCalculator::new(Box::new(EconomyStrategy::default()));
    let pickup = Arc::new(ShippingCalculator::new(Box::new(StorePickupStrategy::new(handle))));

    // Verify Send + Sync by moving calculators into threads
    let economy_handle =
        thread::spawn(move || economy.compute_cost(&cube_order(dec!(20), dec!(15))));

    let pickup_handles: Vec<_> = (0..8)
        .map(|_| {
            let pickup = Arc::clone(&pickup);
            thread::spawn(move || pickup.compute_cost(&cube_order(dec!(3), dec!(4))))
        })
        .collect();

    assert_eq!(economy_handle.join().unwrap().value(), dec!(10.00));
    for handle in pickup_handles {
        assert_eq!(handle.join().unwrap().value(), dec!(0));
    }
    assert_eq!(notifier.count(), 8);
}
