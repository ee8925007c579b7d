// ============================================================================
// Operands
// Closed set of scalar inputs accepted at the public boundary
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use crate::domain::Money;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// A scalar accepted wherever an amount, factor or rate is expected.
///
/// Conversion to [`Decimal`] happens once, in [`Operand::to_decimal`].
/// Floats go through their shortest round-trip text form, so `24.5_f64`
/// becomes exactly `24.5` and never `24.499999999999998...`.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Integer(i64),
    Float(f64),
    Text(String),
    Decimal(Decimal),
}

impl Operand {
    /// Convert to a decimal.
    ///
    /// # Errors
    /// Returns `InvalidOperation` for non-finite floats and for text that is
    /// not a number.
    pub fn to_decimal(&self) -> MoneyResult<Decimal> {
        match self {
            Operand::Integer(value) => Ok(Decimal::from(*value)),
            Operand::Decimal(value) => Ok(*value),
            Operand::Float(value) => {
                if !value.is_finite() {
                    return Err(MoneyError::InvalidOperation(format!(
                        "{value} is not a finite number"
                    )));
                }
                parse_decimal(&value.to_string())
            }
            Operand::Text(text) => parse_decimal(text),
        }
    }

    /// True for the `Text` variant.
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Operand::Text(_))
    }
}

fn parse_decimal(text: &str) -> MoneyResult<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(MoneyError::InvalidOperation(
            "empty string is not a number".to_string(),
        ));
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| MoneyError::InvalidOperation(format!("'{trimmed}' is not a number")))
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Integer(value) => write!(f, "{value}"),
            Operand::Float(value) => write!(f, "{value}"),
            Operand::Text(value) => write!(f, "'{value}'"),
            Operand::Decimal(value) => write!(f, "{value}"),
        }
    }
}

macro_rules! operand_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                #[inline]
                fn from(value: $ty) -> Self {
                    Operand::Integer(i64::from(value))
                }
            }
        )*
    };
}

operand_from_integer!(i8, i16, i32, i64, u8, u16, u32);

// Wider than i64: values past the decimal range become a float that
// `to_decimal` rejects.
macro_rules! operand_from_wide_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    if let Ok(value) = i64::try_from(value) {
                        return Operand::Integer(value);
                    }
                    i128::try_from(value)
                        .ok()
                        .and_then(Decimal::from_i128)
                        .map(Operand::Decimal)
                        .unwrap_or(Operand::Float(value as f64))
                }
            }
        )*
    };
}

operand_from_wide_integer!(i128, isize, u64, u128, usize);

impl From<f64> for Operand {
    #[inline]
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

impl From<f32> for Operand {
    #[inline]
    fn from(value: f32) -> Self {
        // f32 -> f64 widening would expose binary noise (0.1f32 = 0.100000001...)
        Operand::Float(value.to_string().parse().unwrap_or(f64::from(value)))
    }
}

impl From<&str> for Operand {
    #[inline]
    fn from(value: &str) -> Self {
        Operand::Text(value.to_string())
    }
}

impl From<String> for Operand {
    #[inline]
    fn from(value: String) -> Self {
        Operand::Text(value)
    }
}

impl From<Decimal> for Operand {
    #[inline]
    fn from(value: Decimal) -> Self {
        Operand::Decimal(value)
    }
}

// ============================================================================
// Right-hand side of arithmetic
// ============================================================================

/// Right-hand operand of `add`, `subtract`, `multiply` and `divide`.
///
/// A `Money` is used as-is; a scalar is promoted into the left-hand
/// side's currency before use.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Money(Money),
    Scalar(Operand),
}

impl From<Money> for Term {
    #[inline]
    fn from(value: Money) -> Self {
        Term::Money(value)
    }
}

impl From<&Money> for Term {
    #[inline]
    fn from(value: &Money) -> Self {
        Term::Money(value.clone())
    }
}

impl From<Operand> for Term {
    #[inline]
    fn from(value: Operand) -> Self {
        Term::Scalar(value)
    }
}

macro_rules! term_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Term {
                #[inline]
                fn from(value: $ty) -> Self {
                    Term::Scalar(Operand::from(value))
                }
            }
        )*
    };
}

term_from_scalar!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, &str, String,
    Decimal
);
