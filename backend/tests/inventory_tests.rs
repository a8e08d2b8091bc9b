//! Inventory management tests
//!
//! Tests for the stock invariants:
//! - quantity never goes negative
//! - an oversized sale is rejected and leaves no state change
//! - restock adds quantity and overwrites the sale price only

use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::validation;
use std::str::FromStr;

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

// ============================================================================
// Simulation Helpers (mirror the product/sale services without a database)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct StockState {
    pub quantity: i32,
    pub price: Decimal,
    pub cost_price: Decimal,
}

/// Simulate the sale-time stock decrement with its insufficiency check
pub fn simulate_sale_decrement(state: &StockState, quantity: i32) -> Result<StockState, &'static str> {
    if quantity <= 0 {
        return Err("Quantity must be positive");
    }
    if state.quantity < quantity {
        return Err("Insufficient stock");
    }
    Ok(StockState {
        quantity: state.quantity - quantity,
        ..state.clone()
    })
}

/// Simulate a restock: add quantity, overwrite price, leave cost price alone
pub fn simulate_restock(
    state: &StockState,
    additional_quantity: i32,
    new_price: Decimal,
) -> Result<StockState, &'static str> {
    validation::validate_quantity(additional_quantity)?;
    validation::validate_amount(new_price)?;
    Ok(StockState {
        quantity: state.quantity + additional_quantity,
        price: new_price,
        cost_price: state.cost_price,
    })
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    fn widget() -> StockState {
        StockState {
            quantity: 10,
            price: dec("5.0"),
            cost_price: dec("2.0"),
        }
    }

    #[test]
    fn test_sale_decrements_stock() {
        let after = simulate_sale_decrement(&widget(), 3).unwrap();
        assert_eq!(after.quantity, 7);
    }

    /// An oversized sale is rejected and the state is untouched
    #[test]
    fn test_oversized_sale_rejected_without_state_change() {
        let before = StockState {
            quantity: 7,
            ..widget()
        };
        let result = simulate_sale_decrement(&before, 10);

        assert!(result.is_err());
        assert_eq!(before.quantity, 7);
    }

    #[test]
    fn test_sale_of_entire_stock_reaches_zero() {
        let after = simulate_sale_decrement(&widget(), 10).unwrap();
        assert_eq!(after.quantity, 0);
    }

    #[test]
    fn test_sale_from_zero_stock_rejected() {
        let empty = StockState {
            quantity: 0,
            ..widget()
        };
        assert!(simulate_sale_decrement(&empty, 1).is_err());
    }

    #[test]
    fn test_non_positive_sale_quantity_rejected() {
        assert!(simulate_sale_decrement(&widget(), 0).is_err());
        assert!(simulate_sale_decrement(&widget(), -2).is_err());
    }

    /// Scenario: restock(+5, price 5.5) on quantity 7 -> quantity 12,
    /// price 5.5, cost price unchanged
    #[test]
    fn test_restock_scenario() {
        let before = StockState {
            quantity: 7,
            ..widget()
        };
        let after = simulate_restock(&before, 5, dec("5.5")).unwrap();

        assert_eq!(after.quantity, 12);
        assert_eq!(after.price, dec("5.5"));
        assert_eq!(after.cost_price, dec("2.0"));
    }

    #[test]
    fn test_restock_rejects_negative_quantity() {
        assert!(simulate_restock(&widget(), -5, dec("5.5")).is_err());
    }

    #[test]
    fn test_restock_rejects_negative_price() {
        assert!(simulate_restock(&widget(), 5, dec("-1.0")).is_err());
    }

    #[test]
    fn test_product_field_validation() {
        assert!(validation::validate_name("Widget").is_ok());
        assert!(validation::validate_name("   ").is_err());
        assert!(validation::validate_quantity(0).is_ok());
        assert!(validation::validate_quantity(-1).is_err());
        assert!(validation::validate_amount(dec("0.0")).is_ok());
        assert!(validation::validate_amount(dec("-0.01")).is_err());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn stock_strategy() -> impl Strategy<Value = StockState> {
        (0i32..=10_000, 1i64..=100_000, 1i64..=100_000).prop_map(|(quantity, price, cost)| {
            StockState {
                quantity,
                price: Decimal::new(price, 2),
                cost_price: Decimal::new(cost, 2),
            }
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Stock never goes negative under any sale request
        #[test]
        fn prop_stock_never_negative(state in stock_strategy(), quantity in -100i32..=20_000) {
            match simulate_sale_decrement(&state, quantity) {
                Ok(after) => prop_assert!(after.quantity >= 0),
                // rejected exactly when the request was oversized or non-positive
                Err(_) => prop_assert!(quantity <= 0 || quantity > state.quantity),
            }
        }

        /// A sale succeeds exactly when requested quantity fits the stock
        #[test]
        fn prop_sale_succeeds_iff_stock_suffices(
            state in stock_strategy(),
            quantity in 1i32..=20_000
        ) {
            let result = simulate_sale_decrement(&state, quantity);
            prop_assert_eq!(result.is_ok(), state.quantity >= quantity);
        }

        /// Any sequence of sales keeps stock non-negative, rejected sales
        /// included
        #[test]
        fn prop_sale_sequence_preserves_invariant(
            state in stock_strategy(),
            requests in prop::collection::vec(1i32..=500, 1..20)
        ) {
            let mut current = state;
            for quantity in requests {
                if let Ok(after) = simulate_sale_decrement(&current, quantity) {
                    current = after;
                }
                prop_assert!(current.quantity >= 0);
            }
        }

        /// Restock adds exactly the requested quantity
        #[test]
        fn prop_restock_adds_quantity(
            state in stock_strategy(),
            additional in 0i32..=10_000,
            price in 1i64..=100_000
        ) {
            let new_price = Decimal::new(price, 2);
            let after = simulate_restock(&state, additional, new_price).unwrap();

            prop_assert_eq!(after.quantity, state.quantity + additional);
            prop_assert_eq!(after.price, new_price);
        }

        /// Restock and sales never touch the snapshot cost price
        #[test]
        fn prop_cost_price_immutable(
            state in stock_strategy(),
            additional in 0i32..=1000,
            price in 1i64..=100_000,
            sold in 1i32..=100
        ) {
            let restocked = simulate_restock(&state, additional, Decimal::new(price, 2)).unwrap();
            prop_assert_eq!(restocked.cost_price, state.cost_price);

            if let Ok(after_sale) = simulate_sale_decrement(&restocked, sold) {
                prop_assert_eq!(after_sale.cost_price, state.cost_price);
            }
        }
    }
}
