// ============================================================================
// Currency Table
// Read-only descriptors for the built-in currencies
// ============================================================================

use super::currency::Currency;

/// United States dollar
pub const USD: Currency = Currency::from_static("USD", 10, 2, "$");

/// Euro
pub const EUR: Currency = Currency::from_static("EUR", 10, 2, "€");

/// Pound sterling
pub const GBP: Currency = Currency::from_static("GBP", 10, 2, "£");

/// Japanese yen (no minor unit)
pub const JPY: Currency = Currency::from_static("JPY", 10, 0, "¥");

/// Chilean peso (no minor unit)
pub const CLP: Currency = Currency::from_static("CLP", 10, 0, "$");

static ALL: [Currency; 5] = [USD, EUR, GBP, JPY, CLP];

/// Every built-in currency.
pub fn all() -> &'static [Currency] {
    &ALL
}

/// Find a built-in currency by code (case-insensitive).
pub fn lookup(code: &str) -> Option<&'static Currency> {
    let code = code.trim();
    ALL.iter().find(|c| c.code().eq_ignore_ascii_case(code))
}
