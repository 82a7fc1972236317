//! Persisted form of a money value.

use moneta_shared::Currency;
use serde::{Deserialize, Serialize};

use super::error::StoreError;
use crate::money::Money;

/// Row-shaped record: the undiscounted amount and the currency's integer
/// code. Discounts are not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoneyRecord {
    /// Undiscounted amount.
    pub value: f64,
    /// Integer code of the currency.
    pub currency_code: i32,
}

impl MoneyRecord {
    /// Reconstructs the amount and currency.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownCurrencyCode`] if the code does not name
    /// a supported currency.
    pub fn decode(&self) -> Result<(f64, Currency), StoreError> {
        let currency = Currency::from_code(self.currency_code)
            .ok_or(StoreError::UnknownCurrencyCode(self.currency_code))?;
        Ok((self.value, currency))
    }
}

impl From<&Money> for MoneyRecord {
    fn from(money: &Money) -> Self {
        Self {
            value: money.original_value(),
            currency_code: money.currency().code(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_from_money_stores_undiscounted_value() {
        let money = Money::new(250.0, Currency::Gbp).with_discount(10).unwrap();
        let record = MoneyRecord::from(&money);
        assert_eq!(record.value, 250.0);
        assert_eq!(record.currency_code, 134);
    }

    #[test]
    fn test_decode() {
        let record = MoneyRecord {
            value: -3.5,
            currency_code: Currency::Usd.code(),
        };
        assert_eq!(record.decode(), Ok((-3.5, Currency::Usd)));
    }

    #[test]
    fn test_decode_unknown_code() {
        let record = MoneyRecord {
            value: 1.0,
            currency_code: 999,
        };
        assert_eq!(record.decode(), Err(StoreError::UnknownCurrencyCode(999)));
    }

    #[test]
    fn test_serde_shape() {
        let record = MoneyRecord::from(&Money::pivot(12.25));
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "value": 12.25, "currency_code": 47 })
        );
        let back: MoneyRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
