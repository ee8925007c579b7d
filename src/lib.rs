// ============================================================================
// Monetary Library
// Exact, currency-aware money arithmetic on decimals
// ============================================================================

//! # Monetary
//!
//! Exact monetary amounts and currency-aware arithmetic without binary
//! floating-point drift.
//!
//! ## Features
//!
//! - **Three explicit factories**: major units, whole minor units, fractional minor units
//! - **Quantize late**: amounts stay unrounded until formatting, export or comparison
//! - **Banker's rounding** (round-half-to-even) as the single rounding policy
//! - **Currency guard**: arithmetic and comparison across currencies is an error
//! - **Financial toolkit**: VAT, percentage, simple/compound interest, markup
//! - **Structured export** for display (`"3,333.26"`) and integer storage (`333326`)
//!
//! ## Example
//!
//! ```rust
//! use monetary::prelude::*;
//! use monetary::tools::calculate_compound_interest;
//!
//! let price = Money::from_major("24.5", USD).unwrap();
//! let total = price.add("1").unwrap();
//! assert_eq!(total.format(true, true), "$25.50 USD");
//!
//! // Floats are taken through their shortest text form, never binary arithmetic
//! assert_eq!(Money::from_major(100.25, USD).unwrap().to_minor_units().unwrap(), 10025);
//!
//! // Different currencies never mix
//! let euros = Money::from_major(1, EUR).unwrap();
//! assert!(matches!(total.add(&euros), Err(MoneyError::CurrencyMismatch { .. })));
//!
//! let interest =
//!     calculate_compound_interest(&Money::from_major(1000, USD).unwrap(), 5.0, 10, 12).unwrap();
//! assert_eq!(interest.format(false, false), "647.01");
//! ```

pub mod domain;
pub mod numeric;
pub mod tools;
pub mod utils;
pub mod validation;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        currencies, Currency, Money, MoneyRecord, StorageRecord, CLP, EUR, GBP, JPY, USD,
    };
    pub use crate::numeric::{ErrorKind, MoneyError, MoneyResult, Operand, Term};
    pub use crate::tools::{
        calculate_compound_interest, calculate_markup, calculate_percentage,
        calculate_simple_interest, calculate_vat,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_add_scalar_text() {
        let total = Money::from_major("24.5", USD).unwrap().add("1").unwrap();
        assert_eq!(total, Money::from_major("25.50", USD).unwrap());
    }

    #[test]
    fn test_major_to_minor_units() {
        let money = Money::from_major(100.25, USD).unwrap();
        assert_eq!(money.to_minor_units().unwrap(), 10025);
    }

    #[test]
    fn test_fractional_minor_format() {
        let money = Money::from_fractional_minor(12.25, USD).unwrap();
        assert_eq!(money.format(false, false), "0.12");

        // 10.505 sits exactly on the midpoint and rounds to the even cent
        let money = Money::from_fractional_minor(1050.5, USD).unwrap();
        assert_eq!(money.format(false, false), "10.50");
    }

    #[test]
    fn test_vat_scenario() {
        let vat = calculate_vat(&Money::from_major(100, USD).unwrap(), 7.25).unwrap();
        assert_eq!(vat, Money::from_major("6.76", USD).unwrap());
    }

    #[test]
    fn test_compound_interest_scenario() {
        let interest =
            calculate_compound_interest(&Money::from_major(1000, USD).unwrap(), 5.0, 10, 12)
                .unwrap();
        assert!(interest
            .equals_to(&Money::from_major(647.01, USD).unwrap())
            .unwrap());
    }

    #[test]
    fn test_operand_and_currency_errors() {
        let money = Money::from_major(24.5, USD).unwrap();

        let err = money.add("[]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);

        let err = money.add(Money::from_major(1, EUR).unwrap()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CurrencyMismatch);
    }

    #[test]
    fn test_unit_equivalence() {
        let major = Money::from_major(10.50, USD).unwrap();
        let minor = Money::from_minor(1050, USD).unwrap();
        assert!(major.equals_to(&minor).unwrap());
    }

    #[test]
    fn test_commutativity() {
        let a = Money::from_major("2.32", USD).unwrap();
        let b = Money::from_fractional_minor(0.5, USD).unwrap();
        assert!(a.add(&b).unwrap().equals_to(&b.add(&a).unwrap()).unwrap());
    }

    #[test]
    fn test_running_total_over_basket() {
        let basket = [
            Money::from_major("19.99", EUR).unwrap(),
            Money::from_minor(450, EUR).unwrap(),
            Money::from_fractional_minor(99.5, EUR).unwrap(),
        ];
        let subtotal = Money::sum(basket.iter()).unwrap().unwrap();
        assert_eq!(subtotal.format(true, false), "€25.48");

        let with_markup = calculate_markup(&subtotal, 10).unwrap();
        assert_eq!(with_markup.to_minor_units().unwrap(), 2803);
    }

    #[test]
    fn test_lookup_and_export() {
        let gbp = currencies::lookup("gbp").unwrap().clone();
        let money = Money::from_minor(123456789, gbp).unwrap();
        let record = money.to_record(true);
        assert_eq!(record.amount, "1,234,567.89");
        assert_eq!(money.to_storage_record().unwrap().amount, 123456789);
    }
}
