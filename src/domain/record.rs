// ============================================================================
// Money Records
// Structured export shapes for display and for integer storage
// ============================================================================

use super::currency::Currency;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display/interchange form: the quantized amount as text.
///
/// ```text
/// { "amount": "3333.26", "currency": { "code": "USD", "base": 10, "exponent": 2, "symbol": "$" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoneyRecord {
    /// Quantized amount, optionally with grouping separators ("3,333.26")
    pub amount: String,

    pub currency: Currency,
}

/// Storage form: the amount as an integer count of minor units.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StorageRecord {
    /// Minor units (cents for USD)
    pub amount: i128,

    pub currency: Currency,
}
