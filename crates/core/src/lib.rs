//! Money values with cross-currency conversion.
//!
//! This crate contains pure logic with no I/O. A value pairs an `f64` amount,
//! rounded to two places, with a currency known to a rate table.
//!
//! # Modules
//!
//! - `configuration` - Base currency and rates, conversion arithmetic
//! - `store` - Process-wide configuration and the configure calls
//! - `money` - The money value type
//! - `operand` - Right-hand operands for arithmetic and comparison
//!
//! ```
//! use converter_core::{Money, configure};
//!
//! configure("EUR", [("USD", 1.11), ("Bitcoin", 0.0047)]).unwrap();
//!
//! let fifty = Money::new(50, "EUR").unwrap();
//! assert_eq!(fifty.convert_to("USD").unwrap().to_string(), "55.50 USD");
//! assert_eq!(fifty.add(&Money::new(1, "USD").unwrap()).unwrap().to_string(), "50.90 EUR");
//! ```

pub mod configuration;
pub mod money;
pub mod operand;
pub mod store;

#[cfg(test)]
mod props;

pub use configuration::Configuration;
pub use converter_shared::{CurrencyCode, MoneyError, MoneyResult, RatesConfig};
pub use money::Money;
pub use operand::{IntoOperand, Operand};
pub use store::{
    ConfigurationHandle, configuration, configure, configure_base, configure_from_settings,
};
