// ============================================================================
// Currency Descriptor
// Static description of a currency: code, base, exponent and symbol
// ============================================================================

use crate::numeric::{MoneyError, MoneyResult, MAX_PRECISION};
use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Symbol used when a descriptor is built without one.
pub const DEFAULT_SYMBOL: &str = "$";

/// Immutable description of a currency.
///
/// The `exponent` is the single source of truth for minor-unit precision:
/// `base^exponent` minor units make one major unit (100 cents per dollar,
/// 1 yen per yen).
///
/// Descriptors from the built-in table borrow `'static` strings, so cloning
/// one into every `Money` never allocates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Currency {
    code: Cow<'static, str>,
    base: u32,
    exponent: u32,
    symbol: Cow<'static, str>,
}

impl Currency {
    /// Create a descriptor with the default symbol.
    pub fn new(code: impl Into<Cow<'static, str>>, base: u32, exponent: u32) -> Self {
        Self {
            code: code.into(),
            base,
            exponent,
            symbol: Cow::Borrowed(DEFAULT_SYMBOL),
        }
    }

    /// Descriptor over `'static` strings, usable in constants.
    pub const fn from_static(
        code: &'static str,
        base: u32,
        exponent: u32,
        symbol: &'static str,
    ) -> Self {
        Self {
            code: Cow::Borrowed(code),
            base,
            exponent,
            symbol: Cow::Borrowed(symbol),
        }
    }

    /// Builder method: Set the display symbol
    pub fn with_symbol(mut self, symbol: impl Into<Cow<'static, str>>) -> Self {
        self.symbol = symbol.into();
        self
    }

    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    pub const fn base(&self) -> u32 {
        self.base
    }

    #[inline]
    pub const fn exponent(&self) -> u32 {
        self.exponent
    }

    #[inline]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// True when both descriptors name the same currency code.
    #[inline]
    pub fn same_code(&self, other: &Currency) -> bool {
        self.code == other.code
    }

    /// Validate the descriptor
    ///
    /// # Errors
    /// Returns `InvalidCurrency` for an empty code, a base below 2, or an
    /// exponent a decimal cannot represent.
    pub fn validate(&self) -> MoneyResult<()> {
        if self.code.trim().is_empty() {
            return Err(MoneyError::InvalidCurrency(
                "currency code cannot be empty".to_string(),
            ));
        }

        if self.base < 2 {
            return Err(MoneyError::InvalidCurrency(format!(
                "{}: base must be at least 2, got {}",
                self.code, self.base
            )));
        }

        if self.exponent > MAX_PRECISION {
            return Err(MoneyError::InvalidCurrency(format!(
                "{}: exponent {} exceeds the supported {} fractional digits",
                self.code, self.exponent, MAX_PRECISION
            )));
        }

        Ok(())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_creation() {
        let currency = Currency::new("BTC", 10, 8).with_symbol("₿");
        assert_eq!(currency.code(), "BTC");
        assert_eq!(currency.base(), 10);
        assert_eq!(currency.exponent(), 8);
        assert_eq!(currency.symbol(), "₿");
        assert!(currency.validate().is_ok());
    }

    #[test]
    fn test_default_symbol() {
        let currency = Currency::new("XTS", 10, 2);
        assert_eq!(currency.symbol(), DEFAULT_SYMBOL);
    }

    #[test]
    fn test_validation() {
        assert!(Currency::new("", 10, 2).validate().is_err());
        assert!(Currency::new("XTS", 1, 2).validate().is_err());
        assert!(Currency::new("XTS", 10, 29).validate().is_err());
        assert!(Currency::new("XTS", 10, 28).validate().is_ok());
    }

    #[test]
    fn test_same_code() {
        let a = Currency::from_static("USD", 10, 2, "$");
        let b = Currency::new("USD", 10, 2).with_symbol("US$");
        let c = Currency::from_static("EUR", 10, 2, "€");
        assert!(a.same_code(&b));
        assert!(!a.same_code(&c));
        assert_eq!(a.to_string(), "USD");
    }
}
