//! Two-decimal rounding for floating-point amounts.
//!
//! Amounts are carried as `f64`. Rounding goes through `Decimal` so that the
//! midpoint rule applies to the value as written (`0.235`), not to its binary
//! approximation (`0.234999...`).
//!
//! Rounding strategy: Banker's Rounding (round half to even).

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{MoneyError, MoneyResult};

/// Number of decimal places kept on every amount.
pub const AMOUNT_DECIMAL_PLACES: u32 = 2;

/// Magnitudes below this always round to zero at two places.
const ZERO_THRESHOLD: f64 = 0.001;

/// Rounds a decimal value with Banker's Rounding.
#[must_use]
pub fn round_decimal(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}

/// Rounds an amount to two decimal places.
///
/// # Errors
///
/// Returns `InvalidArgument` if the amount is NaN, infinite, or too large to
/// be represented as a `Decimal`.
///
/// # Example
///
/// ```
/// use converter_shared::types::round_amount;
///
/// assert_eq!(round_amount(0.235).unwrap(), 0.24);
/// assert_eq!(round_amount(0.125).unwrap(), 0.12);
/// ```
pub fn round_amount(value: f64) -> MoneyResult<f64> {
    if !value.is_finite() {
        return Err(MoneyError::InvalidArgument(format!(
            "amount must be a finite number, got {value}"
        )));
    }
    if value.abs() < ZERO_THRESHOLD {
        return Ok(0.0);
    }

    // `Display` for f64 yields the shortest text that round-trips.
    let decimal = Decimal::from_str(&value.to_string()).map_err(|_| {
        MoneyError::InvalidArgument(format!("amount {value} is out of range"))
    })?;

    round_decimal(decimal, AMOUNT_DECIMAL_PLACES)
        .to_string()
        .parse::<f64>()
        .map_err(|_| MoneyError::InvalidArgument(format!("amount {value} is out of range")))
}
