// ============================================================================
// Validation
// Operand checks run at every public entry point before any arithmetic
// ============================================================================

use crate::numeric::{MoneyError, MoneyResult, Operand, Term};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Check a constructor amount and return its decimal value.
///
/// # Errors
/// Returns `InvalidOperation` unless the operand is a finite number or text
/// that parses as one.
pub fn check_amount(amount: &Operand) -> MoneyResult<Decimal> {
    amount.to_decimal().inspect_err(|err| {
        tracing::debug!(operand = %amount, error = %err, "rejected monetary amount");
    })
}

/// Check the right-hand side of `add`/`subtract`.
pub fn check_additive_operand(term: &Term) -> MoneyResult<()> {
    check_term(term)
}

/// Check the right-hand side of `multiply`/`divide`.
pub fn check_multiplicative_operand(term: &Term) -> MoneyResult<()> {
    check_term(term)
}

fn check_term(term: &Term) -> MoneyResult<()> {
    match term {
        Term::Money(_) => Ok(()),
        Term::Scalar(operand) => check_amount(operand).map(|_| ()),
    }
}

// ============================================================================
// Toolkit scalars
// ============================================================================

/// Check a rate or percentage: a non-negative number, never text.
///
/// # Errors
/// - `TypeMismatch` if the rate is given as text
/// - `InvalidOperation` if it is not a finite number
/// - `DomainConstraint` if it is negative
pub fn check_rate(name: &str, rate: &Operand) -> MoneyResult<Decimal> {
    if rate.is_text() {
        tracing::debug!(argument = name, value = %rate, "rejected textual rate");
        return Err(MoneyError::TypeMismatch(format!(
            "{name} must be a number, got {rate}"
        )));
    }

    let value = rate.to_decimal()?;
    if value < Decimal::ZERO {
        return Err(MoneyError::DomainConstraint(format!(
            "{name} cannot be negative, got {value}"
        )));
    }

    Ok(value)
}

/// Check a count of periods: a non-negative whole number.
///
/// # Errors
/// As [`check_rate`], plus `TypeMismatch` for a fractional count.
pub fn check_periods(name: &str, periods: &Operand) -> MoneyResult<u64> {
    let value = check_rate(name, periods)?;
    if !value.fract().is_zero() {
        return Err(MoneyError::TypeMismatch(format!(
            "{name} must be a whole number of periods, got {value}"
        )));
    }

    value.to_u64().ok_or(MoneyError::Overflow)
}
