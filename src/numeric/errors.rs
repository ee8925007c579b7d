// ============================================================================
// Money Errors
// Error types for monetary construction, arithmetic and the financial toolkit
// ============================================================================

use thiserror::Error;

/// Errors that can occur while building or combining monetary values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Operand is not usable as a number (unparsable text, NaN, infinity)
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// Arithmetic or comparison across two different currency codes
    #[error("currencies can not be different: expected {expected}, found {found}")]
    CurrencyMismatch { expected: String, found: String },

    /// A numeric argument is outside its allowed range
    #[error("domain constraint violated: {0}")]
    DomainConstraint(String),

    /// A toolkit argument has the wrong category of value
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// A minor-units amount was not a whole number
    #[error("minor currency units must be whole numbers, got {0}; use from_fractional_minor for fractional minor units")]
    ArgumentFormat(String),

    /// Result does not fit in a 96-bit decimal
    #[error("arithmetic overflow: result exceeded the decimal range")]
    Overflow,

    /// Currency descriptor failed validation
    #[error("invalid currency: {0}")]
    InvalidCurrency(String),

    /// Structured export could not be encoded
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Category of a [`MoneyError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidOperation,
    CurrencyMismatch,
    DomainConstraint,
    TypeMismatch,
    ArgumentFormat,
    Overflow,
    InvalidCurrency,
    Serialization,
}

impl MoneyError {
    /// The error's category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MoneyError::InvalidOperation(_) => ErrorKind::InvalidOperation,
            MoneyError::CurrencyMismatch { .. } => ErrorKind::CurrencyMismatch,
            MoneyError::DomainConstraint(_) => ErrorKind::DomainConstraint,
            MoneyError::TypeMismatch(_) => ErrorKind::TypeMismatch,
            MoneyError::ArgumentFormat(_) => ErrorKind::ArgumentFormat,
            MoneyError::Overflow => ErrorKind::Overflow,
            MoneyError::InvalidCurrency(_) => ErrorKind::InvalidCurrency,
            MoneyError::Serialization(_) => ErrorKind::Serialization,
        }
    }

    pub(crate) fn currency_mismatch(expected: &str, found: &str) -> Self {
        MoneyError::CurrencyMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for MoneyError {
    fn from(err: serde_json::Error) -> Self {
        MoneyError::Serialization(err.to_string())
    }
}

/// Result type alias for monetary operations
pub type MoneyResult<T> = Result<T, MoneyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            MoneyError::Overflow.to_string(),
            "arithmetic overflow: result exceeded the decimal range"
        );
        assert_eq!(
            MoneyError::currency_mismatch("USD", "EUR").to_string(),
            "currencies can not be different: expected USD, found EUR"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(
            MoneyError::ArgumentFormat("10.5".into()).kind(),
            ErrorKind::ArgumentFormat
        );
        assert_eq!(
            MoneyError::currency_mismatch("USD", "JPY").kind(),
            ErrorKind::CurrencyMismatch
        );
        assert_ne!(
            MoneyError::TypeMismatch("rate".into()).kind(),
            MoneyError::DomainConstraint("rate".into()).kind()
        );
    }
}
