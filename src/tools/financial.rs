// ============================================================================
// Financial Toolkit
// VAT, percentages, interest and markup built on Money arithmetic
// ============================================================================
//
// Every function validates its scalar arguments before touching the amount:
// - text where a number is required      -> TypeMismatch
// - fractional period counts             -> TypeMismatch
// - negative rates, durations, frequency -> DomainConstraint
// All arithmetic stays in decimals; no binary floats are involved.

use crate::domain::Money;
use crate::numeric::{checked_pow, MoneyError, MoneyResult, Operand};
use crate::validation::{check_periods, check_rate};
use rust_decimal::Decimal;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

fn as_fraction(percent: Decimal) -> MoneyResult<Decimal> {
    percent.checked_div(HUNDRED).ok_or(MoneyError::Overflow)
}

/// VAT contained in a gross `amount` at `vat_rate` percent.
///
/// `amount - amount / (1 + vat_rate/100)`
///
/// # Example
/// ```
/// use monetary::prelude::*;
/// use monetary::tools::calculate_vat;
///
/// let vat = calculate_vat(&Money::from_major(100, USD).unwrap(), 7.25).unwrap();
/// assert_eq!(vat.format(false, false), "6.76");
/// ```
pub fn calculate_vat(amount: &Money, vat_rate: impl Into<Operand>) -> MoneyResult<Money> {
    let rate = check_rate("vat_rate", &vat_rate.into())?;
    tracing::debug!(amount = %amount, %rate, "calculating vat");

    let gross_factor = Decimal::ONE
        .checked_add(as_fraction(rate)?)
        .ok_or(MoneyError::Overflow)?;
    let net = amount.divide(gross_factor)?;
    amount.subtract(&net)
}

/// `percentage` percent of `amount`.
pub fn calculate_percentage(amount: &Money, percentage: impl Into<Operand>) -> MoneyResult<Money> {
    let percentage = check_rate("percentage", &percentage.into())?;
    tracing::debug!(amount = %amount, %percentage, "calculating percentage");

    amount.multiply(as_fraction(percentage)?)
}

/// Simple interest: `principal * rate/100 * duration`.
///
/// `duration` is a whole number of periods.
pub fn calculate_simple_interest(
    principal: &Money,
    interest_rate: impl Into<Operand>,
    duration: impl Into<Operand>,
) -> MoneyResult<Money> {
    let rate = check_rate("interest_rate", &interest_rate.into())?;
    let periods = check_periods("duration", &duration.into())?;
    tracing::debug!(principal = %principal, %rate, periods, "calculating simple interest");

    principal
        .multiply(as_fraction(rate)?)?
        .multiply(Decimal::from(periods))
}

/// Compound interest earned on `principal`, quantized to the currency.
///
/// `principal * (1 + rate/100/frequency)^(frequency * duration) - principal`
///
/// # Errors
/// `DomainConstraint` for a zero compounding frequency, in addition to the
/// usual rate and period checks.
pub fn calculate_compound_interest(
    principal: &Money,
    interest_rate: impl Into<Operand>,
    duration: impl Into<Operand>,
    compound_frequency: impl Into<Operand>,
) -> MoneyResult<Money> {
    let rate = check_rate("interest_rate", &interest_rate.into())?;
    let periods = check_periods("duration", &duration.into())?;
    let frequency = check_periods("compound_frequency", &compound_frequency.into())?;
    if frequency == 0 {
        return Err(MoneyError::DomainConstraint(
            "compound_frequency must be at least 1".to_string(),
        ));
    }
    tracing::debug!(
        principal = %principal,
        %rate,
        periods,
        frequency,
        "calculating compound interest"
    );

    let periodic_rate = as_fraction(rate)?
        .checked_div(Decimal::from(frequency))
        .ok_or(MoneyError::Overflow)?;
    let growth = checked_pow(
        Decimal::ONE
            .checked_add(periodic_rate)
            .ok_or(MoneyError::Overflow)?,
        frequency.checked_mul(periods).ok_or(MoneyError::Overflow)?,
    )?;

    principal
        .multiply(growth)?
        .subtract(principal)?
        .rounded()
}

/// Final price after adding `markup` percent to `cost`.
pub fn calculate_markup(cost: &Money, markup: impl Into<Operand>) -> MoneyResult<Money> {
    let markup = check_rate("markup", &markup.into())?;
    tracing::debug!(cost = %cost, %markup, "calculating markup");

    cost.add(cost.multiply(as_fraction(markup)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::currencies::{CLP, EUR, JPY, USD};
    use crate::numeric::ErrorKind;
    use rust_decimal_macros::dec;

    fn major(amount: impl Into<Operand>, currency: crate::domain::Currency) -> Money {
        Money::from_major(amount, currency).unwrap()
    }

    #[test]
    fn test_vat() {
        assert_eq!(calculate_vat(&major(100, USD), 7.25).unwrap(), major("6.76", USD));
        assert_eq!(calculate_vat(&major(50, EUR), 21).unwrap(), major("8.68", EUR));
        assert_eq!(calculate_vat(&major(500, CLP), 19).unwrap(), major("80", CLP));
        assert!(calculate_vat(&major(100, USD), 0).unwrap().is_zero());
    }

    #[test]
    fn test_vat_errors() {
        let amount = major(100, USD);
        assert_eq!(
            calculate_vat(&amount, "7.25").unwrap_err().kind(),
            ErrorKind::TypeMismatch
        );
        assert_eq!(
            calculate_vat(&amount, -7.25).unwrap_err().kind(),
            ErrorKind::DomainConstraint
        );
    }

    #[test]
    fn test_percentage() {
        let amount = major("3000", USD);
        assert_eq!(calculate_percentage(&amount, 15).unwrap(), major("450", USD));
        assert_eq!(calculate_percentage(&amount, 0).unwrap(), major("0", USD));
        assert_eq!(calculate_percentage(&amount, 100).unwrap(), major("3000", USD));
        assert_eq!(
            calculate_percentage(&major("3000", EUR), 15).unwrap(),
            major("450", EUR)
        );
    }

    #[test]
    fn test_percentage_errors() {
        let amount = major("3000", USD);
        assert_eq!(
            calculate_percentage(&amount, "15").unwrap_err().kind(),
            ErrorKind::TypeMismatch
        );
        assert_eq!(
            calculate_percentage(&amount, -15).unwrap_err().kind(),
            ErrorKind::DomainConstraint
        );
    }

    #[test]
    fn test_simple_interest() {
        assert_eq!(
            calculate_simple_interest(&major(1000, USD), 5, 2).unwrap(),
            major(100, USD)
        );
        assert_eq!(
            calculate_simple_interest(&major(500, EUR), 3.5, 3).unwrap(),
            major(52.5, EUR)
        );
    }

    #[test]
    fn test_simple_interest_errors() {
        let principal = major(1000, USD);
        let cases = [
            (Operand::from(5), Operand::from("2.5"), ErrorKind::TypeMismatch),
            (Operand::from(5), Operand::from(2.5), ErrorKind::TypeMismatch),
            (Operand::from(-5), Operand::from(2), ErrorKind::DomainConstraint),
            (Operand::from(5), Operand::from(-2), ErrorKind::DomainConstraint),
        ];
        for (rate, duration, kind) in cases {
            let err = calculate_simple_interest(&principal, rate, duration).unwrap_err();
            assert_eq!(err.kind(), kind);
        }
    }

    #[test]
    fn test_compound_interest() {
        let interest = calculate_compound_interest(&major(1000, USD), 5.0, 10, 12).unwrap();
        assert!(interest.equals_to(&major(647.01, USD)).unwrap());
        assert_eq!(interest.amount(), dec!(647.01));

        let interest = calculate_compound_interest(&major(500, EUR), 2.5, 5, 4).unwrap();
        assert!(interest.equals_to(&major(66.35, EUR)).unwrap());

        let interest = calculate_compound_interest(&major(2000, JPY), 1.0, 3, 1).unwrap();
        assert!(interest.equals_to(&major(60.60, JPY)).unwrap());
        assert_eq!(interest.format(false, false), "61");
    }

    #[test]
    fn test_compound_interest_zero_duration() {
        let interest = calculate_compound_interest(&major(1000, USD), 5, 0, 12).unwrap();
        assert!(interest.is_zero());
    }

    #[test]
    fn test_compound_interest_errors() {
        let principal = major(1000, USD);
        let cases = [
            (Operand::from(-5.0), Operand::from(10), Operand::from(12)),
            (Operand::from(5.0), Operand::from(-10), Operand::from(12)),
            (Operand::from(5.0), Operand::from(10), Operand::from(-12)),
            (Operand::from(5.0), Operand::from(10), Operand::from(0)),
        ];
        for (rate, duration, frequency) in cases {
            let err = calculate_compound_interest(&principal, rate, duration, frequency).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DomainConstraint);
        }
    }

    #[test]
    fn test_markup() {
        assert_eq!(calculate_markup(&major(1000, USD), 15).unwrap(), major(1150, USD));
        assert_eq!(calculate_markup(&major(500, EUR), 10).unwrap(), major(550, EUR));
        assert_eq!(calculate_markup(&major(2000, CLP), 20).unwrap(), major(2400, CLP));
    }

    #[test]
    fn test_single_precision_and_usize_arguments() {
        assert_eq!(calculate_vat(&major(100, USD), 7.25f32).unwrap(), major("6.76", USD));
        assert_eq!(calculate_percentage(&major(3000, USD), 15f32).unwrap(), major(450, USD));

        let periods: usize = 2;
        assert_eq!(
            calculate_simple_interest(&major(1000, USD), 5, periods).unwrap(),
            major(100, USD)
        );
        let interest = calculate_compound_interest(&major(1000, USD), 5f32, 10u64, 12usize).unwrap();
        assert!(interest.equals_to(&major(647.01, USD)).unwrap());
    }

    #[test]
    fn test_markup_errors() {
        let cost = major(1000, USD);
        assert_eq!(
            calculate_markup(&cost, "15").unwrap_err().kind(),
            ErrorKind::TypeMismatch
        );
        assert_eq!(
            calculate_markup(&cost, -15).unwrap_err().kind(),
            ErrorKind::DomainConstraint
        );
    }
}
