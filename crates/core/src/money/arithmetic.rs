//! Arithmetic and conversion on money values.
//!
//! Binary operations convert the operand into the receiver's currency and
//! combine undiscounted amounts. Results are fresh values: receiver's
//! currency, no discount, unbound.

use moneta_shared::Currency;

use super::types::Money;
use crate::currency::Exchange;
use crate::error::{MoneyError, MoneyResult};

impl Money {
    /// Adds `other`, converted into this currency.
    ///
    /// # Errors
    ///
    /// Returns `RateUnavailable` if `other` cannot be converted.
    pub fn add(&self, other: &Self) -> MoneyResult<Self> {
        self.add_with(other, &Exchange::standard())
    }

    /// [`Money::add`] using the given engine.
    ///
    /// # Errors
    ///
    /// Returns `RateUnavailable` if `other` cannot be converted.
    pub fn add_with(&self, other: &Self, exchange: &Exchange<'_>) -> MoneyResult<Self> {
        let operand = self.operand(other, exchange)?;
        Ok(Self::new(self.original_value() + operand, self.currency()))
    }

    /// Subtracts `other`, converted into this currency.
    ///
    /// # Errors
    ///
    /// Returns `RateUnavailable` if `other` cannot be converted.
    pub fn subtract(&self, other: &Self) -> MoneyResult<Self> {
        self.subtract_with(other, &Exchange::standard())
    }

    /// [`Money::subtract`] using the given engine.
    ///
    /// # Errors
    ///
    /// Returns `RateUnavailable` if `other` cannot be converted.
    pub fn subtract_with(&self, other: &Self, exchange: &Exchange<'_>) -> MoneyResult<Self> {
        let operand = self.operand(other, exchange)?;
        Ok(Self::new(self.original_value() - operand, self.currency()))
    }

    /// Multiplies by `other`, converted into this currency.
    ///
    /// # Errors
    ///
    /// Returns `RateUnavailable` if `other` cannot be converted.
    pub fn multiply(&self, other: &Self) -> MoneyResult<Self> {
        self.multiply_with(other, &Exchange::standard())
    }

    /// [`Money::multiply`] using the given engine.
    ///
    /// # Errors
    ///
    /// Returns `RateUnavailable` if `other` cannot be converted.
    pub fn multiply_with(&self, other: &Self, exchange: &Exchange<'_>) -> MoneyResult<Self> {
        let operand = self.operand(other, exchange)?;
        Ok(Self::new(self.original_value() * operand, self.currency()))
    }

    /// Divides by `other`, converted into this currency.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` if the effective value of `other`, once
    /// converted, is exactly zero, and `RateUnavailable` if `other` cannot
    /// be converted.
    pub fn divide(&self, other: &Self) -> MoneyResult<Self> {
        self.divide_with(other, &Exchange::standard())
    }

    /// [`Money::divide`] using the given engine.
    ///
    /// # Errors
    ///
    /// Same as [`Money::divide`].
    pub fn divide_with(&self, other: &Self, exchange: &Exchange<'_>) -> MoneyResult<Self> {
        let effective = exchange.convert(other.value(), other.currency(), self.currency())?;
        // Exact comparison; a conversion that lands near zero still divides.
        #[allow(clippy::float_cmp)]
        let is_zero = effective == 0.0;
        if is_zero {
            return Err(MoneyError::DivisionByZero);
        }
        let operand = self.operand(other, exchange)?;
        Ok(Self::new(self.original_value() / operand, self.currency()))
    }

    /// Converts the undiscounted amount into `target`.
    ///
    /// The result carries no discount.
    ///
    /// # Errors
    ///
    /// Returns `RateUnavailable` if either currency lacks a rate.
    pub fn convert(&self, target: Currency) -> MoneyResult<Self> {
        self.convert_with(target, &Exchange::standard())
    }

    /// [`Money::convert`] using the given engine.
    ///
    /// # Errors
    ///
    /// Returns `RateUnavailable` if either currency lacks a rate.
    pub fn convert_with(&self, target: Currency, exchange: &Exchange<'_>) -> MoneyResult<Self> {
        Ok(Self::new(self.value_in_with(target, exchange)?, target))
    }

    /// Undiscounted amount expressed in the pivot currency.
    ///
    /// # Errors
    ///
    /// Returns `RateUnavailable` if this currency lacks a rate.
    pub fn pivot_value(&self) -> MoneyResult<f64> {
        self.pivot_value_with(&Exchange::standard())
    }

    /// [`Money::pivot_value`] using the given engine.
    ///
    /// # Errors
    ///
    /// Returns `RateUnavailable` if this currency lacks a rate.
    pub fn pivot_value_with(&self, exchange: &Exchange<'_>) -> MoneyResult<f64> {
        exchange.to_pivot(self.original_value(), self.currency())
    }

    /// Undiscounted amount expressed in `currency`.
    ///
    /// # Errors
    ///
    /// Returns `RateUnavailable` if either currency lacks a rate.
    pub fn value_in(&self, currency: Currency) -> MoneyResult<f64> {
        self.value_in_with(currency, &Exchange::standard())
    }

    /// [`Money::value_in`] using the given engine.
    ///
    /// # Errors
    ///
    /// Returns `RateUnavailable` if either currency lacks a rate.
    pub fn value_in_with(&self, currency: Currency, exchange: &Exchange<'_>) -> MoneyResult<f64> {
        exchange.convert(self.original_value(), self.currency(), currency)
    }

    fn operand(&self, other: &Self, exchange: &Exchange<'_>) -> MoneyResult<f64> {
        other.value_in_with(self.currency(), exchange)
    }
}
