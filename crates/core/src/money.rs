//! Immutable money value with conversion and currency-reducing arithmetic.
//!
//! Amounts are `f64` rounded to two places with Banker's Rounding after every
//! operation. The result of a binary operation is always in the left
//! operand's currency.
//!
//! Comparison converts the right side into the left side's currency and is
//! directional. `Money` has no `PartialEq`/`PartialOrd`; comparison goes
//! through [`Money::equals`] and [`Money::compare`].

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::debug;

use converter_shared::types::round_amount;
use converter_shared::{CurrencyCode, MoneyError, MoneyResult};

use crate::configuration::Configuration;
use crate::operand::{IntoOperand, Operand};
use crate::store;

/// An amount in a known currency.
///
/// Cloning is cheap and shares the underlying value; [`Money::ptr_eq`] tells
/// whether two handles are the same value.
#[derive(Clone)]
pub struct Money {
    inner: Arc<MoneyInner>,
}

struct MoneyInner {
    amount: f64,
    currency: CurrencyCode,
    configuration: Arc<Configuration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    fn apply(self, lhs: f64, rhs: f64) -> MoneyResult<f64> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide if rhs == 0.0 => Err(MoneyError::InvalidArgument(
                "division by zero".to_string(),
            )),
            Self::Divide => Ok(lhs / rhs),
        }
    }
}

impl Money {
    /// Creates money validated against the current global configuration.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` if the currency is not configured, including
    /// when nothing has been configured yet, and `InvalidArgument` if the
    /// amount is not finite.
    pub fn new(amount: impl Into<f64>, currency: impl Into<CurrencyCode>) -> MoneyResult<Self> {
        let currency = currency.into();
        let Some(configuration) = store::configuration() else {
            return Err(MoneyError::UnknownCurrency(currency));
        };
        Self::with_configuration(configuration, amount, currency)
    }

    /// Creates money validated against an explicit configuration.
    pub fn with_configuration(
        configuration: Arc<Configuration>,
        amount: impl Into<f64>,
        currency: impl Into<CurrencyCode>,
    ) -> MoneyResult<Self> {
        let currency = currency.into();
        configuration.ensure_known(&currency)?;

        Ok(Self {
            inner: Arc::new(MoneyInner {
                amount: round_amount(amount.into())?,
                currency,
                configuration,
            }),
        })
    }

    /// Returns the amount, rounded to two decimal places.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.inner.amount
    }

    /// Returns the currency.
    #[must_use]
    pub fn currency(&self) -> &CurrencyCode {
        &self.inner.currency
    }

    /// Returns the configuration this value was validated against.
    #[must_use]
    pub fn configuration(&self) -> &Arc<Configuration> {
        &self.inner.configuration
    }

    /// Returns true if both handles point at the same value.
    #[must_use]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }

    /// Converts to another currency.
    ///
    /// Converting to the current currency returns a handle to this same value.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` for an unconfigured target and `InvalidRate`
    /// if a rate on the conversion path is unusable.
    pub fn convert_to(&self, currency: impl Into<CurrencyCode>) -> MoneyResult<Self> {
        let target = currency.into();
        let configuration = self.configuration();
        configuration.ensure_known(&target)?;

        if target == self.inner.currency {
            return Ok(self.clone());
        }

        let converted = configuration.convert_amount(self.amount(), self.currency(), &target)?;
        debug!(
            from = %self.currency(),
            to = %target,
            amount = self.amount(),
            converted,
            "Converted money"
        );

        Self::with_configuration(Arc::clone(configuration), converted, target)
    }

    /// Adds an operand, keeping this value's currency.
    pub fn add(&self, operand: impl IntoOperand) -> MoneyResult<Self> {
        self.apply(Operation::Add, operand)
    }

    /// Subtracts an operand, keeping this value's currency.
    pub fn subtract(&self, operand: impl IntoOperand) -> MoneyResult<Self> {
        self.apply(Operation::Subtract, operand)
    }

    /// Multiplies by an operand, keeping this value's currency.
    pub fn multiply(&self, operand: impl IntoOperand) -> MoneyResult<Self> {
        self.apply(Operation::Multiply, operand)
    }

    /// Divides by an operand, keeping this value's currency.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the resolved divisor is zero.
    pub fn divide(&self, operand: impl IntoOperand) -> MoneyResult<Self> {
        self.apply(Operation::Divide, operand)
    }

    /// Returns true if the operand is money worth the same after conversion.
    ///
    /// Plain numbers and failed conversions are never equal.
    pub fn equals(&self, other: impl IntoOperand) -> bool {
        other.into_operand().is_ok_and(|operand| {
            operand.as_money().is_some_and(|money| {
                self.amount_in_own_currency(money)
                    .is_ok_and(|amount| amount == self.amount())
            })
        })
    }

    /// Orders this value against other money, converting it first.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the operand is not money, including
    /// operands that are not numbers either, and any error raised by the
    /// conversion.
    pub fn compare(&self, other: impl IntoOperand) -> MoneyResult<Ordering> {
        let money = match other.into_operand() {
            Ok(Operand::Money(money)) => money,
            Ok(Operand::Number(number)) => return Err(comparison_failed(number)),
            Err(MoneyError::TypeMismatch { type_name }) => {
                return Err(comparison_failed(type_name));
            }
            Err(err) => return Err(err),
        };

        let amount = self.amount_in_own_currency(&money)?;
        self.amount().partial_cmp(&amount).ok_or_else(|| {
            MoneyError::InvalidArgument(format!("comparison of {self} with {money} failed"))
        })
    }

    /// Returns true if this value is worth less than the operand.
    pub fn less_than(&self, other: impl IntoOperand) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// Returns true if this value is worth more than the operand.
    pub fn greater_than(&self, other: impl IntoOperand) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    fn apply(&self, operation: Operation, operand: impl IntoOperand) -> MoneyResult<Self> {
        let rhs = match operand.into_operand()? {
            Operand::Money(money) => self.amount_in_own_currency(&money)?,
            Operand::Number(number) => number,
        };
        let result = operation.apply(self.amount(), rhs)?;

        Self::with_configuration(Arc::clone(self.configuration()), result, self.currency())
    }

    fn amount_in_own_currency(&self, other: &Self) -> MoneyResult<f64> {
        if other.currency() == self.currency() {
            Ok(other.amount())
        } else {
            Ok(other.convert_to(self.currency())?.amount())
        }
    }
}

fn comparison_failed(operand: impl fmt::Display) -> MoneyError {
    MoneyError::InvalidArgument(format!("comparison of Money with {operand} failed"))
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.amount(), self.currency())
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Money({self})")
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Money", 2)?;
        state.serialize_field("amount", &self.amount())?;
        state.serialize_field("currency", self.currency())?;
        state.end()
    }
}
