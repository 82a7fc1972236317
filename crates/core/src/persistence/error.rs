//! Persistence error types.

use moneta_shared::{AppError, MoneyRecordId};
use thiserror::Error;

/// Errors raised while saving or loading money records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record exists for the handle.
    #[error("money record not found: {0}")]
    NotFound(MoneyRecordId),

    /// Stored currency code is not a supported currency.
    #[error("unknown currency code: {0}")]
    UnknownCurrencyCode(i32),

    /// Failure reported by the storage backend.
    #[error("storage backend failed: {0}")]
    Backend(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => Self::NotFound(err.to_string()),
            StoreError::UnknownCurrencyCode(_) => Self::UnknownCurrency(err.to_string()),
            StoreError::Backend(msg) => Self::Persistence(msg),
        }
    }
}
