//! Common types used across the converter.

pub mod amount;
pub mod currency;

pub use amount::{AMOUNT_DECIMAL_PLACES, round_amount, round_decimal};
pub use currency::CurrencyCode;
