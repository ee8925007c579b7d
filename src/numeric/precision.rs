// ============================================================================
// Working Precision
// Per-call precision context for normalization and quantization
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use rust_decimal::{Decimal, RoundingStrategy};

/// Most significant digits a 96-bit decimal mantissa can carry.
pub const MAX_PRECISION: u32 = 28;

/// Rounding policy applied wherever a value is quantized.
pub const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointNearestEven;

/// Precision context computed for one amount in one currency.
///
/// The context is a plain value: it is built for each normalization and
/// passed down explicitly, so two calls on different threads never observe
/// each other's setting.
///
/// ```
/// use monetary::numeric::WorkingPrecision;
/// use rust_decimal_macros::dec;
///
/// let ctx = WorkingPrecision::for_amount(dec!(10.505), 10, 2);
/// assert_eq!(ctx.digits(), 10);
/// assert_eq!(ctx.quantize(dec!(10.505), 2), dec!(10.50));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WorkingPrecision {
    digits: u32,
    strategy: RoundingStrategy,
}

impl WorkingPrecision {
    /// Precision large enough to scale `amount` by `base^exponent` and then
    /// round it without dropping significant digits first.
    ///
    /// The floor is the currency base; the result is capped at
    /// [`MAX_PRECISION`].
    pub fn for_amount(amount: Decimal, base: u32, exponent: u32) -> Self {
        let required = significant_digits(amount).saturating_add(exponent);
        let digits = required.max(base).min(MAX_PRECISION);

        tracing::trace!(%amount, base, exponent, digits, "working precision selected");

        Self {
            digits,
            strategy: ROUNDING,
        }
    }

    /// Significant digits the amount needs at its currency's precision.
    #[inline]
    pub const fn digits(&self) -> u32 {
        self.digits
    }

    /// Strip trailing zeros.
    ///
    /// Every significant digit of `amount` is kept, even past
    /// [`MAX_PRECISION`]: a 29-digit mantissa that fits the decimal is only
    /// ever rounded once, by [`WorkingPrecision::quantize`].
    pub fn normalize(&self, amount: Decimal) -> Decimal {
        amount.normalize()
    }

    /// Round to exactly `exponent` fractional digits.
    ///
    /// The result always carries `exponent` digits after the point, so
    /// `100` quantized at 2 renders as `100.00`.
    pub fn quantize(&self, amount: Decimal, exponent: u32) -> Decimal {
        let mut quantized = amount.round_dp_with_strategy(exponent, self.strategy);
        quantized.rescale(exponent);
        quantized
    }
}

/// Count of digits in the decimal's mantissa (at least 1).
pub fn significant_digits(amount: Decimal) -> u32 {
    let mantissa = amount.mantissa().unsigned_abs();
    if mantissa == 0 {
        1
    } else {
        mantissa.ilog10() + 1
    }
}

/// Checked `base^exponent` by repeated squaring.
///
/// # Errors
/// Returns `Overflow` if an intermediate product leaves the decimal range.
pub fn checked_pow(base: Decimal, exponent: u64) -> MoneyResult<Decimal> {
    let mut result = Decimal::ONE;
    let mut factor = base;
    let mut remaining = exponent;

    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result.checked_mul(factor).ok_or(MoneyError::Overflow)?;
        }
        remaining >>= 1;
        if remaining > 0 {
            factor = factor.checked_mul(factor).ok_or(MoneyError::Overflow)?;
        }
    }

    Ok(result)
}

/// Number of minor units in one major unit (`base^exponent`).
///
/// # Errors
/// Returns `Overflow` if the scale does not fit in a decimal.
pub fn minor_unit_scale(base: u32, exponent: u32) -> MoneyResult<Decimal> {
    checked_pow(Decimal::from(base), u64::from(exponent))
}
