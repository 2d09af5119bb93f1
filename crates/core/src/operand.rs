//! Right-hand operands of money arithmetic and comparison.

use std::str::FromStr;

use serde_json::Value;

use converter_shared::{MoneyError, MoneyResult};

use crate::money::Money;

/// A right-hand operand: another money value or a plain number.
#[derive(Debug, Clone)]
pub enum Operand {
    /// Money, converted to the receiver's currency before use.
    Money(Money),
    /// A plain number, used as is.
    Number(f64),
}

impl Operand {
    /// Returns the money value, if this operand is one.
    #[must_use]
    pub fn as_money(&self) -> Option<&Money> {
        match self {
            Self::Money(money) => Some(money),
            Self::Number(_) => None,
        }
    }
}

impl FromStr for Operand {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .map(Self::Number)
            .map_err(|_| MoneyError::type_mismatch("string"))
    }
}

impl TryFrom<&Value> for Operand {
    type Error = MoneyError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(number) => number
                .as_f64()
                .map(Self::Number)
                .ok_or_else(|| MoneyError::type_mismatch("number")),
            Value::String(text) => text.parse(),
            Value::Bool(_) => Err(MoneyError::type_mismatch("boolean")),
            Value::Null => Err(MoneyError::type_mismatch("null")),
            Value::Array(_) => Err(MoneyError::type_mismatch("array")),
            Value::Object(_) => Err(MoneyError::type_mismatch("object")),
        }
    }
}

impl TryFrom<Value> for Operand {
    type Error = MoneyError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}

/// Conversion into an [`Operand`], failing for values that are not numbers.
pub trait IntoOperand {
    /// Performs the conversion.
    fn into_operand(self) -> MoneyResult<Operand>;
}

impl IntoOperand for Operand {
    fn into_operand(self) -> MoneyResult<Operand> {
        Ok(self)
    }
}

impl IntoOperand for Money {
    fn into_operand(self) -> MoneyResult<Operand> {
        Ok(Operand::Money(self))
    }
}

impl IntoOperand for &Money {
    fn into_operand(self) -> MoneyResult<Operand> {
        Ok(Operand::Money(self.clone()))
    }
}

impl IntoOperand for Value {
    fn into_operand(self) -> MoneyResult<Operand> {
        Operand::try_from(&self)
    }
}

impl IntoOperand for &Value {
    fn into_operand(self) -> MoneyResult<Operand> {
        Operand::try_from(self)
    }
}

impl IntoOperand for &str {
    fn into_operand(self) -> MoneyResult<Operand> {
        self.parse()
    }
}

macro_rules! numeric_operand {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                #[allow(
                    clippy::cast_precision_loss,
                    clippy::cast_lossless,
                    clippy::unnecessary_cast
                )]
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }

            impl IntoOperand for $ty {
                fn into_operand(self) -> MoneyResult<Operand> {
                    Ok(Operand::from(self))
                }
            }
        )*
    };
}

numeric_operand!(f64, f32, i32, u32, i64, u64);

impl From<Money> for Operand {
    fn from(money: Money) -> Self {
        Self::Money(money)
    }
}

impl From<&Money> for Operand {
    fn from(money: &Money) -> Self {
        Self::Money(money.clone())
    }
}
