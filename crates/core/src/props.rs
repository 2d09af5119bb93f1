//! Property-based tests for money construction and conversion.
//!
//! - Property 1: Construction rounds to two decimal places
//! - Property 2: Base round trip stays within rounding error
//! - Property 3: Arithmetic is currency-reducing

use std::sync::Arc;

use proptest::prelude::*;

use crate::configuration::Configuration;
use crate::money::Money;

/// Strategy to generate amounts (-1,000,000.0000 to 1,000,000.0000).
#[allow(clippy::cast_precision_loss)]
fn amount() -> impl Strategy<Value = f64> {
    (-10_000_000_000i64..10_000_000_000i64).prop_map(|v| v as f64 / 10_000.0)
}

/// Strategy to generate exchange rates (0.5000 to 200.0000).
fn rate() -> impl Strategy<Value = f64> {
    (5_000u32..2_000_000u32).prop_map(|v| f64::from(v) / 10_000.0)
}

fn config_with(rate: f64) -> Arc<Configuration> {
    Arc::new(Configuration::new("EUR", [("USD", rate), ("GBP", 0.85)]).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property 1.1: The stored amount is within half a cent of the input.
    #[test]
    fn prop_new_rounds_within_half_cent(value in amount()) {
        let money = Money::with_configuration(config_with(1.11), value, "EUR").unwrap();
        prop_assert!(
            (money.amount() - value).abs() <= 0.005 + 1e-9,
            "{} rounded to {}",
            value, money.amount()
        );
    }

    /// Property 1.2: The stored amount has at most two decimal places.
    #[test]
    fn prop_new_has_two_decimals(value in amount()) {
        let money = Money::with_configuration(config_with(1.11), value, "EUR").unwrap();
        let cents = money.amount() * 100.0;
        prop_assert!((cents - cents.round()).abs() < 1e-6, "{} has extra digits", money.amount());
    }

    /// Property 2.1: base -> currency -> base returns the original amount,
    /// within the rounding error of both steps.
    #[test]
    fn prop_base_round_trip(value in amount(), rate in rate()) {
        let config = config_with(rate);
        let original = Money::with_configuration(config, value, "EUR").unwrap();
        let back = original.convert_to("USD").unwrap().convert_to("EUR").unwrap();

        let tolerance = 0.005 / rate + 0.005 + 1e-6;
        prop_assert!(
            (back.amount() - original.amount()).abs() <= tolerance,
            "{} came back as {} at rate {}",
            original.amount(), back.amount(), rate
        );
    }

    /// Property 3.1: The result currency is always the left operand's.
    #[test]
    fn prop_result_currency_is_left(left in amount(), right in amount(), rate in rate()) {
        let config = config_with(rate);
        let lhs = Money::with_configuration(Arc::clone(&config), left, "GBP").unwrap();
        let rhs = Money::with_configuration(config, right, "USD").unwrap();

        prop_assert_eq!(lhs.add(&rhs).unwrap().currency().to_string(), "GBP");
        prop_assert_eq!(lhs.subtract(&rhs).unwrap().currency().to_string(), "GBP");
        prop_assert_eq!(lhs.multiply(&rhs).unwrap().currency().to_string(), "GBP");
    }

    /// Property 3.2: Adding a number matches adding the rounded amounts.
    #[test]
    fn prop_add_number(left in amount(), right in amount()) {
        let money = Money::with_configuration(config_with(1.11), left, "EUR").unwrap();
        let sum = money.add(right).unwrap();
        prop_assert!(
            (sum.amount() - (money.amount() + right)).abs() <= 0.005 + 1e-6,
            "{} + {} = {}",
            money.amount(), right, sum.amount()
        );
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod unit_tests {
    use super::*;

    // =========================================================================
    // Property 2: Round Trip - Specific Examples
    // =========================================================================

    /// 50 EUR -> 55.50 USD -> 50.00 EUR.
    #[test]
    fn test_round_trip_example() {
        let config = config_with(1.11);
        let original = Money::with_configuration(config, 50, "EUR").unwrap();
        let usd = original.convert_to("USD").unwrap();
        assert_eq!(usd.amount(), 55.5);
        assert_eq!(usd.convert_to("EUR").unwrap().amount(), 50.0);
    }
}
