//! Error types for money construction, conversion, and arithmetic.

use thiserror::Error;

use crate::types::CurrencyCode;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by the currency converter.
///
/// Every operation either returns a well-formed value or one of these;
/// nothing is retried or recovered internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MoneyError {
    /// A required argument was missing or unusable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The currency is neither the base currency nor a configured rate.
    #[error("Unknown currency {0}. Please, configure conversion rates first")]
    UnknownCurrency(CurrencyCode),

    /// An arithmetic operand could not be turned into a number.
    #[error(
        "Can't convert {type_name} to a number. Please, provide either Money or a numeric value"
    )]
    TypeMismatch {
        /// Runtime type of the offending operand.
        type_name: String,
    },

    /// A rate needed by a conversion is missing, zero, negative, or not finite.
    #[error("Invalid rate for {currency}: {rate:?}")]
    InvalidRate {
        /// Currency whose rate was looked up.
        currency: CurrencyCode,
        /// The rate found, if any.
        rate: Option<f64>,
    },

    /// Configuration sources could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MoneyError {
    /// Returns a stable machine-readable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            Self::TypeMismatch { .. } => "TYPE_MISMATCH",
            Self::InvalidRate { .. } => "INVALID_RATE",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Builds a `TypeMismatch` for the given runtime type name.
    pub fn type_mismatch(type_name: impl Into<String>) -> Self {
        Self::TypeMismatch {
            type_name: type_name.into(),
        }
    }
}

impl From<config::ConfigError> for MoneyError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
