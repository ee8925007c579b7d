// ============================================================================
// Money
// Immutable monetary value: unrounded decimal amount plus currency
// ============================================================================

use super::currency::Currency;
use super::record::{MoneyRecord, StorageRecord};
use crate::numeric::{
    minor_unit_scale, MoneyError, MoneyResult, Operand, Term, WorkingPrecision,
};
use crate::validation;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// An exact monetary amount in a given currency.
///
/// The amount is always held in major units (dollars, not cents) and is
/// never rounded at construction. Rounding to the currency's exponent
/// (round-half-to-even) happens on demand: in [`Money::format`],
/// [`Money::to_minor_units`] and every comparison.
///
/// Values are created through one of three factories:
///
/// ```
/// use monetary::prelude::*;
///
/// let a = Money::from_major("10.50", USD).unwrap();
/// let b = Money::from_minor(1050, USD).unwrap();
/// let c = Money::from_fractional_minor(1050.4, USD).unwrap();
///
/// assert!(a.equals_to(&b).unwrap());
/// assert!(a.equals_to(&c).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from major units (dollars, euros). The amount is stored as-is.
    ///
    /// # Errors
    /// - `InvalidOperation` if the amount is not a number
    /// - `InvalidCurrency` if the descriptor is malformed
    pub fn from_major(amount: impl Into<Operand>, currency: Currency) -> MoneyResult<Self> {
        let amount = validation::check_amount(&amount.into())?;
        Self::build(amount, currency)
    }

    /// Create from whole minor units (cents).
    ///
    /// # Errors
    /// - `InvalidOperation` if the amount is not a number
    /// - `ArgumentFormat` if the amount has a fractional part; use
    ///   [`Money::from_fractional_minor`] for sub-unit amounts
    pub fn from_minor(amount: impl Into<Operand>, currency: Currency) -> MoneyResult<Self> {
        let amount = validation::check_amount(&amount.into())?;
        if !amount.fract().is_zero() {
            return Err(MoneyError::ArgumentFormat(amount.to_string()));
        }
        Self::from_minor_decimal(amount, currency)
    }

    /// Create from minor units that may carry a fraction (12.25 cents).
    ///
    /// The converted amount is kept unrounded; quantization is deferred to
    /// formatting, export and comparison. Two values that differ only below
    /// the currency's precision therefore compare equal but still sum
    /// differently.
    pub fn from_fractional_minor(
        amount: impl Into<Operand>,
        currency: Currency,
    ) -> MoneyResult<Self> {
        let amount = validation::check_amount(&amount.into())?;
        Self::from_minor_decimal(amount, currency)
    }

    fn from_minor_decimal(amount: Decimal, currency: Currency) -> MoneyResult<Self> {
        currency.validate()?;
        let scale = minor_unit_scale(currency.base(), currency.exponent())?;
        let major = amount.checked_div(scale).ok_or(MoneyError::Overflow)?;
        Self::build(major, currency)
    }

    fn build(amount: Decimal, currency: Currency) -> MoneyResult<Self> {
        currency.validate()?;
        Ok(Self { amount, currency })
    }

    /// Rebuild a value from its display record. Grouping separators are
    /// accepted.
    pub fn from_record(record: &MoneyRecord) -> MoneyResult<Self> {
        let amount = record.amount.replace(',', "");
        Self::from_major(amount, record.currency.clone())
    }

    /// Rebuild a value from its storage record.
    pub fn from_storage_record(record: &StorageRecord) -> MoneyResult<Self> {
        let minor = Decimal::from_i128(record.amount).ok_or(MoneyError::Overflow)?;
        Self::from_minor(minor, record.currency.clone())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The unrounded amount in major units.
    #[inline]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// The amount quantized to the currency's exponent.
    pub fn raw_amount(&self) -> Decimal {
        self.normalize(true)
    }

    #[inline]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    #[inline]
    pub fn code(&self) -> &str {
        self.currency.code()
    }

    #[inline]
    pub fn symbol(&self) -> &str {
        self.currency.symbol()
    }

    #[inline]
    pub fn exponent(&self) -> u32 {
        self.currency.exponent()
    }

    #[inline]
    pub fn base(&self) -> u32 {
        self.currency.base()
    }

    /// True if the quantized amount is zero.
    pub fn is_zero(&self) -> bool {
        self.raw_amount().is_zero()
    }

    /// True if the quantized amount is below zero.
    pub fn is_negative(&self) -> bool {
        self.raw_amount() < Decimal::ZERO
    }

    // ========================================================================
    // Normalization
    // ========================================================================

    fn precision(&self) -> WorkingPrecision {
        WorkingPrecision::for_amount(self.amount, self.currency.base(), self.currency.exponent())
    }

    /// The amount with trailing zeros stripped, optionally quantized to
    /// exactly `exponent` fractional digits.
    pub fn normalize(&self, quantize: bool) -> Decimal {
        let ctx = self.precision();
        let normalized = ctx.normalize(self.amount);
        if quantize {
            ctx.quantize(normalized, self.currency.exponent())
        } else {
            normalized
        }
    }

    /// A new value whose amount is already quantized.
    pub fn rounded(&self) -> MoneyResult<Self> {
        Self::from_major(self.raw_amount(), self.currency.clone())
    }

    /// The quantized amount as an integer count of minor units.
    ///
    /// # Errors
    /// Returns `Overflow` if the count does not fit in a decimal.
    pub fn to_minor_units(&self) -> MoneyResult<i128> {
        let scale = minor_unit_scale(self.currency.base(), self.currency.exponent())?;
        self.normalize(true)
            .checked_mul(scale)
            .and_then(|minor| minor.to_i128())
            .ok_or(MoneyError::Overflow)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    fn ensure_same_currency(&self, other: &Money) -> MoneyResult<()> {
        if self.currency.same_code(&other.currency) {
            Ok(())
        } else {
            tracing::debug!(
                expected = self.code(),
                found = other.code(),
                "currency mismatch"
            );
            Err(MoneyError::currency_mismatch(self.code(), other.code()))
        }
    }

    /// Use a `Money` directly or promote a scalar into this currency.
    fn resolve(&self, term: Term) -> MoneyResult<Money> {
        let other = match term {
            Term::Money(money) => money,
            Term::Scalar(operand) => Money::from_major(operand, self.currency.clone())?,
        };
        self.ensure_same_currency(&other)?;
        Ok(other)
    }

    /// Sum of this value and `addend`.
    ///
    /// Both sides are combined unquantized, so precision carries across
    /// chained operations.
    ///
    /// # Errors
    /// - `InvalidOperation` if a scalar addend is not a number
    /// - `CurrencyMismatch` if the addend is in another currency
    pub fn add(&self, addend: impl Into<Term>) -> MoneyResult<Money> {
        let term = addend.into();
        validation::check_additive_operand(&term)?;
        let other = self.resolve(term)?;
        let total = self
            .normalize(false)
            .checked_add(other.normalize(false))
            .ok_or(MoneyError::Overflow)?;
        Money::from_major(total, self.currency.clone())
    }

    /// Difference of this value and `subtrahend`.
    pub fn subtract(&self, subtrahend: impl Into<Term>) -> MoneyResult<Money> {
        let term = subtrahend.into();
        validation::check_additive_operand(&term)?;
        let other = self.resolve(term)?;
        let total = self
            .normalize(false)
            .checked_sub(other.normalize(false))
            .ok_or(MoneyError::Overflow)?;
        Money::from_major(total, self.currency.clone())
    }

    /// This value scaled by `factor`.
    pub fn multiply(&self, factor: impl Into<Term>) -> MoneyResult<Money> {
        let term = factor.into();
        validation::check_multiplicative_operand(&term)?;
        let other = self.resolve(term)?;
        let total = self
            .normalize(false)
            .checked_mul(other.normalize(false))
            .ok_or(MoneyError::Overflow)?;
        Money::from_major(total, self.currency.clone())
    }

    /// This value divided by `divisor`.
    ///
    /// # Errors
    /// Returns `DomainConstraint` when the divisor is zero.
    pub fn divide(&self, divisor: impl Into<Term>) -> MoneyResult<Money> {
        let term = divisor.into();
        validation::check_multiplicative_operand(&term)?;
        let other = self.resolve(term)?;
        let divisor = other.normalize(false);
        if divisor.is_zero() {
            return Err(MoneyError::DomainConstraint("division by zero".to_string()));
        }
        let total = self
            .normalize(false)
            .checked_div(divisor)
            .ok_or(MoneyError::Overflow)?;
        Money::from_major(total, self.currency.clone())
    }

    /// Reverse addition with a scalar seed: the seed is the neutral element.
    #[inline]
    pub fn radd(&self, _seed: impl Into<Operand>) -> Money {
        self.clone()
    }

    /// Running total over a mix of values and scalars.
    ///
    /// Scalars ahead of the first `Money` act as the neutral seed (see
    /// [`Money::radd`]) and are only checked to be numbers; scalars after it
    /// are promoted into the running total's currency. Returns `None` when
    /// the sequence holds no `Money` at all.
    ///
    /// ```
    /// use monetary::prelude::*;
    ///
    /// let total = Money::sum([
    ///     Term::from(0),
    ///     Term::from(Money::from_major("24.5", USD).unwrap()),
    ///     Term::from("1"),
    /// ])
    /// .unwrap()
    /// .unwrap();
    /// assert_eq!(total.format(false, false), "25.50");
    /// ```
    pub fn sum<I>(terms: I) -> MoneyResult<Option<Money>>
    where
        I: IntoIterator,
        I::Item: Into<Term>,
    {
        let mut total: Option<Money> = None;
        for term in terms {
            total = match (total, term.into()) {
                (Some(running), term) => Some(running.add(term)?),
                (None, Term::Money(first)) => Some(first),
                (None, Term::Scalar(seed)) => {
                    validation::check_amount(&seed)?;
                    None
                }
            };
        }
        Ok(total)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    fn compare(&self, other: &Money) -> MoneyResult<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.normalize(true).cmp(&other.normalize(true)))
    }

    /// Equal after both sides are quantized.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` if the currencies differ.
    pub fn equals_to(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    pub fn less_than(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    pub fn less_than_or_equal(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    pub fn greater_than(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    pub fn greater_than_or_equal(&self, other: &Money) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    // ========================================================================
    // Formatting and Export
    // ========================================================================

    fn formatted_amount(&self) -> String {
        group_thousands(&self.normalize(true).to_string())
    }

    /// Render the quantized amount with grouping separators.
    ///
    /// # Example
    /// ```
    /// use monetary::prelude::*;
    ///
    /// let money = Money::from_major("234342.3010", USD).unwrap();
    /// assert_eq!(money.format(false, false), "234,342.30");
    /// assert_eq!(money.format(true, true), "$234,342.30 USD");
    /// ```
    pub fn format(&self, with_symbol: bool, with_code: bool) -> String {
        let mut out = String::new();
        if with_symbol {
            out.push_str(self.symbol());
        }
        out.push_str(&self.formatted_amount());
        if with_code {
            out.push(' ');
            out.push_str(self.code());
        }
        out
    }

    /// Structured form with the quantized amount as text.
    pub fn to_record(&self, with_formatting: bool) -> MoneyRecord {
        let amount = if with_formatting {
            self.formatted_amount()
        } else {
            self.normalize(true).to_string()
        };
        MoneyRecord {
            amount,
            currency: self.currency.clone(),
        }
    }

    /// Structured form with the amount as integer minor units.
    pub fn to_storage_record(&self) -> MoneyResult<StorageRecord> {
        Ok(StorageRecord {
            amount: self.to_minor_units()?,
            currency: self.currency.clone(),
        })
    }

    /// JSON text of [`Money::to_record`].
    #[cfg(feature = "serde")]
    pub fn to_json(&self, with_formatting: bool) -> MoneyResult<String> {
        Ok(serde_json::to_string(&self.to_record(with_formatting))?)
    }

    /// JSON text of [`Money::to_storage_record`].
    #[cfg(feature = "serde")]
    pub fn to_storage_json(&self) -> MoneyResult<String> {
        Ok(serde_json::to_string(&self.to_storage_record()?)?)
    }
}

/// Insert `,` between thousands in the integer part of a plain decimal string.
fn group_thousands(plain: &str) -> String {
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(pos) => (&unsigned[..pos], Some(&unsigned[pos + 1..])),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(plain.len() + int_part.len() / 3);
    grouped.push_str(sign);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

// ============================================================================
// Trait Implementations
// ============================================================================

/// Same currency code and equal after quantization.
impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.compare(other), Ok(Ordering::Equal))
    }
}

/// `None` when the currencies differ.
impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(false, false))
    }
}

// Operator sugar returns the same Result as the named methods
impl<T: Into<Term>> Add<T> for &Money {
    type Output = MoneyResult<Money>;

    fn add(self, rhs: T) -> Self::Output {
        Money::add(self, rhs)
    }
}

impl<T: Into<Term>> Sub<T> for &Money {
    type Output = MoneyResult<Money>;

    fn sub(self, rhs: T) -> Self::Output {
        self.subtract(rhs)
    }
}

impl<T: Into<Term>> Mul<T> for &Money {
    type Output = MoneyResult<Money>;

    fn mul(self, rhs: T) -> Self::Output {
        self.multiply(rhs)
    }
}

impl<T: Into<Term>> Div<T> for &Money {
    type Output = MoneyResult<Money>;

    fn div(self, rhs: T) -> Self::Output {
        self.divide(rhs)
    }
}

// ============================================================================
// Tests
// ============================================================================



#[cfg(test)]
mod quickchecks {
    use super::*;
    use crate::domain::currencies::USD;
    use quickcheck::quickcheck;

    quickcheck! {
        fn addition_commutes(a: i32, b: i32) -> bool {
            let a = Money::from_fractional_minor(Decimal::new(i64::from(a), 1), USD).unwrap();
            let b = Money::from_minor(b, USD).unwrap();
            a.add(&b).unwrap().equals_to(&b.add(&a).unwrap()).unwrap()
        }
    }
}
