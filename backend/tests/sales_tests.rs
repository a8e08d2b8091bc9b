//! Sales recording tests
//!
//! Covers the total-price identity, price snapshotting, and the
//! all-or-nothing stock-check-then-record sequence.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

// ============================================================================
// Simulation Helpers (mirror the sale service without a database)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedSale {
    pub quantity: i32,
    pub cost_price: Decimal,
    pub unit_price: Decimal,
    pub total_price: Decimal,
}

/// Simulate recording a sale: the stock check happens before any mutation,
/// and either both the decrement and the sale happen or neither does.
pub fn simulate_record_sale(
    stock: i32,
    quantity: i32,
    cost_price: Decimal,
    unit_price: Decimal,
) -> Result<(i32, RecordedSale), &'static str> {
    if quantity <= 0 {
        return Err("Quantity must be positive");
    }
    if cost_price < Decimal::ZERO || unit_price < Decimal::ZERO {
        return Err("Amount cannot be negative");
    }
    if stock < quantity {
        return Err("Insufficient stock");
    }

    let sale = RecordedSale {
        quantity,
        cost_price,
        unit_price,
        total_price: unit_price * Decimal::from(quantity),
    };

    Ok((stock - quantity, sale))
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Scenario: Widget(quantity=10, cost=2.0, price=5.0);
    /// record_sale(quantity=3, unit_price=5.0) -> stock 7, total 15.0
    #[test]
    fn test_widget_sale_scenario() {
        let (stock_after, sale) =
            simulate_record_sale(10, 3, dec("2.0"), dec("5.0")).unwrap();

        assert_eq!(stock_after, 7);
        assert_eq!(sale.total_price, dec("15.0"));
    }

    /// Scenario: quantity=7; record_sale(quantity=10) -> rejected, stock stays 7
    #[test]
    fn test_insufficient_stock_scenario() {
        let stock_before = 7;
        let result = simulate_record_sale(stock_before, 10, dec("2.0"), dec("5.0"));

        assert!(result.is_err());
        assert_eq!(stock_before, 7);
    }

    #[test]
    fn test_total_price_uses_unit_price_not_cost() {
        let (_, sale) = simulate_record_sale(100, 4, dec("2.0"), dec("9.5")).unwrap();
        assert_eq!(sale.total_price, dec("38.0"));
    }

    #[test]
    fn test_zero_priced_giveaway_is_allowed() {
        let (_, sale) = simulate_record_sale(5, 2, dec("1.0"), dec("0.0")).unwrap();
        assert_eq!(sale.total_price, Decimal::ZERO);
    }

    #[test]
    fn test_negative_prices_rejected() {
        assert!(simulate_record_sale(5, 1, dec("-1.0"), dec("5.0")).is_err());
        assert!(simulate_record_sale(5, 1, dec("1.0"), dec("-5.0")).is_err());
    }

    /// A later price change on the product does not alter the recorded sale
    #[test]
    fn test_sale_prices_are_snapshots() {
        let (_, sale) = simulate_record_sale(10, 3, dec("2.0"), dec("5.0")).unwrap();

        // product price rises afterwards
        let _new_product_price = dec("8.0");

        assert_eq!(sale.unit_price, dec("5.0"));
        assert_eq!(sale.cost_price, dec("2.0"));
        assert_eq!(sale.total_price, dec("15.0"));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn price_strategy() -> impl Strategy<Value = Decimal> {
        (0i64..=100_000).prop_map(|n| Decimal::new(n, 2))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// total_price always equals quantity * unit_price
        #[test]
        fn prop_total_price_identity(
            stock in 1i32..=10_000,
            quantity in 1i32..=10_000,
            cost in price_strategy(),
            unit in price_strategy()
        ) {
            if let Ok((_, sale)) = simulate_record_sale(stock, quantity, cost, unit) {
                prop_assert_eq!(sale.total_price, unit * Decimal::from(quantity));
            }
        }

        /// The decrement and the sale record agree on the quantity
        #[test]
        fn prop_decrement_matches_sale_quantity(
            stock in 0i32..=10_000,
            quantity in 1i32..=10_000,
            cost in price_strategy(),
            unit in price_strategy()
        ) {
            match simulate_record_sale(stock, quantity, cost, unit) {
                Ok((stock_after, sale)) => {
                    prop_assert_eq!(stock - stock_after, sale.quantity);
                    prop_assert!(stock_after >= 0);
                }
                Err(_) => {
                    // rejection produces no sale and no decrement
                    prop_assert!(quantity > stock || quantity <= 0);
                }
            }
        }

        /// Repeated sales drain stock to exactly zero, never below
        #[test]
        fn prop_stock_drains_to_zero(
            initial in 0i32..=500,
            requests in prop::collection::vec(1i32..=50, 1..50)
        ) {
            let mut stock = initial;
            let mut sold = 0i32;

            for quantity in requests {
                if let Ok((after, sale)) = simulate_record_sale(
                    stock,
                    quantity,
                    dec("1.0"),
                    dec("2.0"),
                ) {
                    stock = after;
                    sold += sale.quantity;
                }
            }

            prop_assert!(stock >= 0);
            prop_assert_eq!(stock + sold, initial);
        }
    }
}
