//! The money value type.

use moneta_shared::{Currency, MoneyRecordId};
use serde::{Deserialize, Serialize};

use super::format::format_amount;
use crate::error::{MoneyError, MoneyResult};

/// An amount of a specific currency with an optional percentage discount.
///
/// Only the undiscounted amount is stored. The effective value is derived
/// from it and the discount on every read, so changing the discount
/// changes every later read.
#[derive(Debug, Clone)]
pub struct Money {
    value: f64,
    currency: Currency,
    discount: u8,
    binding: Option<MoneyRecordId>,
}

/// Amount and currency as a plain record for external collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoneyDetails {
    /// Undiscounted amount.
    pub amount: f64,
    /// Currency of the amount.
    pub currency: Currency,
}

impl Money {
    /// Creates a new Money instance without discount.
    ///
    /// Negative and zero amounts are accepted as-is.
    #[must_use]
    pub const fn new(value: f64, currency: Currency) -> Self {
        Self {
            value,
            currency,
            discount: 0,
            binding: None,
        }
    }

    /// Creates an amount in the pivot currency.
    #[must_use]
    pub const fn pivot(value: f64) -> Self {
        Self::new(value, Currency::PIVOT)
    }

    /// Effective value: the amount after the discount is applied.
    #[must_use]
    pub fn value(&self) -> f64 {
        if self.discount > 0 {
            self.value - self.discount_value()
        } else {
            self.value
        }
    }

    /// Undiscounted amount.
    #[must_use]
    pub const fn original_value(&self) -> f64 {
        self.value
    }

    /// Currency of the amount.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Display symbol of the currency.
    #[must_use]
    pub const fn currency_symbol(&self) -> &'static str {
        self.currency.symbol()
    }

    /// Discount percentage, 0 to 100.
    #[must_use]
    pub const fn discount(&self) -> u8 {
        self.discount
    }

    /// Amount taken off by the discount.
    #[must_use]
    pub fn discount_value(&self) -> f64 {
        self.value * f64::from(self.discount) / 100.0
    }

    /// Sets the discount percentage and returns `self` for chaining.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidDiscount`] if `percent` is outside
    /// 0..=100; the current discount is left untouched.
    pub fn set_discount(&mut self, percent: i32) -> MoneyResult<&mut Self> {
        self.discount = u8::try_from(percent)
            .ok()
            .filter(|p| *p <= 100)
            .ok_or(MoneyError::InvalidDiscount(percent))?;
        Ok(self)
    }

    /// Builder-style variant of [`Money::set_discount`].
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidDiscount`] if `percent` is outside 0..=100.
    pub fn with_discount(mut self, percent: i32) -> MoneyResult<Self> {
        self.set_discount(percent)?;
        Ok(self)
    }

    /// Amount and currency for serialization.
    #[must_use]
    pub const fn details(&self) -> MoneyDetails {
        MoneyDetails {
            amount: self.value,
            currency: self.currency,
        }
    }

    /// Symbol, a space, then the undiscounted amount at the currency's
    /// decimal places with `,` thousands separators.
    #[must_use]
    pub fn formatted(&self) -> String {
        format!(
            "{} {}",
            self.currency.symbol(),
            format_amount(self.value, self.currency.decimals())
        )
    }

    /// Associates this value with a persisted record.
    pub fn bind(&mut self, id: MoneyRecordId) {
        self.binding = Some(id);
    }

    /// Handle of the persisted record this value is bound to.
    #[must_use]
    pub const fn binding(&self) -> Option<MoneyRecordId> {
        self.binding
    }
}

impl From<f64> for Money {
    fn from(value: f64) -> Self {
        Self::pivot(value)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}
