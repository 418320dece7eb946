//! Property-based tests for movement application.

use proptest::prelude::*;

use super::error::InventoryError;
use super::movement::{Movement, MovementType};
use super::stock::{StockStatus, is_low_stock};

fn movement_type_strategy() -> impl Strategy<Value = MovementType> {
    prop_oneof![Just(MovementType::In), Just(MovementType::Out)]
}

fn movement_strategy() -> impl Strategy<Value = Movement> {
    (1i64..=1_000i64, movement_type_strategy())
        .prop_map(|(quantity, kind)| Movement::new(quantity, kind).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Quantity stays non-negative across any sequence of movements,
    /// applying only the ones that succeed.
    #[test]
    fn prop_quantity_never_negative(
        movements in prop::collection::vec(movement_strategy(), 0..60),
    ) {
        let mut quantity = 0;
        for movement in movements {
            if let Ok(next) = movement.apply(quantity) {
                quantity = next;
            }
            prop_assert!(quantity >= 0);
        }
    }

    /// A rejected OUT reports exactly what was on hand and what was asked.
    #[test]
    fn prop_out_beyond_stock_rejected(current in 0i32..10_000, excess in 1i32..10_000) {
        let requested = current + excess;
        let movement = Movement::outbound(i64::from(requested)).unwrap();
        prop_assert_eq!(
            movement.apply(current),
            Err(InventoryError::InsufficientStock { available: current, requested })
        );
    }

    /// A successful movement changes the quantity by exactly its signed change.
    #[test]
    fn prop_apply_matches_signed_change(current in 0i32..100_000, movement in movement_strategy()) {
        if let Ok(next) = movement.apply(current) {
            prop_assert_eq!(next - current, movement.signed_change());
        }
    }

    /// Low stock is exactly strict less-than.
    #[test]
    fn prop_low_stock_is_strict(quantity in 0i32..1_000, min_stock in 0i32..1_000) {
        prop_assert_eq!(is_low_stock(quantity, min_stock), quantity < min_stock);
        prop_assert_eq!(
            StockStatus::of(quantity, min_stock) == StockStatus::Low,
            quantity < min_stock
        );
    }
}
