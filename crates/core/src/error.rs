//! Money and conversion error types.
//!
//! Every error aborts the operation that raised it; operands are never
//! modified before an error is returned.

use moneta_shared::{AppError, Currency};
use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by the rate table, the conversion engine and money values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MoneyError {
    /// No rate against the pivot currency is known for this currency.
    #[error("No conversion rate available for {0}")]
    RateUnavailable(Currency),

    /// Divisor's effective value is zero.
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// Discount percentage outside 0..=100.
    #[error("Discount must be between 0 and 100, got {0}")]
    InvalidDiscount(i32),

    /// Aggregation over zero elements.
    #[error("Cannot aggregate an empty collection")]
    EmptyCollection,

    /// Rate table entry that is not a positive finite number, or targets the pivot.
    #[error("Invalid conversion rate {rate} for {currency}")]
    InvalidRate {
        /// Currency the rate was given for.
        currency: Currency,
        /// Offending rate.
        rate: f64,
    },

    /// Currency code outside the supported set.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

impl From<MoneyError> for AppError {
    fn from(err: MoneyError) -> Self {
        match err {
            MoneyError::RateUnavailable(_) => Self::NotFound(err.to_string()),
            MoneyError::UnknownCurrency(code) => Self::UnknownCurrency(code),
            MoneyError::DivisionByZero
            | MoneyError::InvalidDiscount(_)
            | MoneyError::EmptyCollection
            | MoneyError::InvalidRate { .. } => Self::Validation(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            MoneyError::RateUnavailable(Currency::Rub).to_string(),
            "No conversion rate available for RUB"
        );
        assert_eq!(MoneyError::DivisionByZero.to_string(), "Cannot divide by zero");
        assert_eq!(
            MoneyError::InvalidDiscount(101).to_string(),
            "Discount must be between 0 and 100, got 101"
        );
        assert_eq!(
            MoneyError::EmptyCollection.to_string(),
            "Cannot aggregate an empty collection"
        );
    }

    #[test]
    fn test_into_app_error() {
        let err: AppError = MoneyError::RateUnavailable(Currency::Ars).into();
        assert_eq!(err.error_code(), "NOT_FOUND");

        let err: AppError = MoneyError::InvalidDiscount(-1).into();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");

        let err: AppError = MoneyError::UnknownCurrency("XYZ".into()).into();
        assert!(matches!(err, AppError::UnknownCurrency(code) if code == "XYZ"));
    }
}
