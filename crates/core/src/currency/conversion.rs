//! Currency conversion through the pivot currency.
//!
//! Direction matters: a rate `r` for currency X is stored as "X per pivot",
//! and converting an amount of X into the pivot MULTIPLIES by `r`, while
//! converting out of the pivot divides by it. Every other operation relies
//! on this convention.

use moneta_shared::Currency;
use tracing::trace;

use super::rates::RateTable;
use crate::error::MoneyResult;

/// Stateless conversion engine over a borrowed rate table.
#[derive(Debug, Clone, Copy)]
pub struct Exchange<'a> {
    rates: &'a RateTable,
}

impl<'a> Exchange<'a> {
    /// Creates an engine reading from `rates`.
    #[must_use]
    pub const fn new(rates: &'a RateTable) -> Self {
        Self { rates }
    }

    /// Engine over the built-in reference rates.
    #[must_use]
    pub fn standard() -> Exchange<'static> {
        Exchange::new(RateTable::reference())
    }

    /// The table this engine reads from.
    #[must_use]
    pub const fn rates(&self) -> &'a RateTable {
        self.rates
    }

    /// Rate of a non-pivot currency against the pivot.
    ///
    /// # Errors
    ///
    /// Returns `RateUnavailable` if the table has no entry.
    pub fn rate(&self, currency: Currency) -> MoneyResult<f64> {
        self.rates.rate(currency)
    }

    /// Converts `value` units of `currency` into pivot units.
    ///
    /// # Errors
    ///
    /// Returns `RateUnavailable` if `currency` is not the pivot and has no rate.
    pub fn to_pivot(&self, value: f64, currency: Currency) -> MoneyResult<f64> {
        if currency.is_pivot() {
            return Ok(value);
        }
        Ok(value * self.rate(currency)?)
    }

    /// Converts `value` pivot units into `currency`.
    ///
    /// # Errors
    ///
    /// Returns `RateUnavailable` if `currency` is not the pivot and has no rate.
    pub fn from_pivot(&self, value: f64, currency: Currency) -> MoneyResult<f64> {
        if currency.is_pivot() {
            return Ok(value);
        }
        Ok(value / self.rate(currency)?)
    }

    /// Converts `value` from one currency into another via the pivot.
    ///
    /// Same-currency conversion returns `value` untouched.
    ///
    /// # Errors
    ///
    /// Returns `RateUnavailable` if either side lacks a rate.
    pub fn convert(&self, value: f64, from: Currency, to: Currency) -> MoneyResult<f64> {
        if from == to {
            return Ok(value);
        }
        let pivot = self.to_pivot(value, from)?;
        let converted = self.from_pivot(pivot, to)?;
        trace!(%from, %to, value, converted, "converted amount");
        Ok(converted)
    }
}

impl Default for Exchange<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::MoneyError;
    use rstest::rstest;

    fn doubled() -> RateTable {
        RateTable::new([(Currency::Usd, 2.0), (Currency::Gbp, 0.5)]).unwrap()
    }

    #[test]
    fn test_to_pivot_multiplies_by_rate() {
        let table = doubled();
        let exchange = Exchange::new(&table);
        assert_eq!(exchange.to_pivot(10.0, Currency::Usd).unwrap(), 20.0);
        assert_eq!(exchange.to_pivot(10.0, Currency::Gbp).unwrap(), 5.0);
    }

    #[test]
    fn test_from_pivot_divides_by_rate() {
        let table = doubled();
        let exchange = Exchange::new(&table);
        assert_eq!(exchange.from_pivot(20.0, Currency::Usd).unwrap(), 10.0);
        assert_eq!(exchange.from_pivot(5.0, Currency::Gbp).unwrap(), 10.0);
    }

    #[test]
    fn test_pivot_is_identity_without_lookup() {
        let table = RateTable::new(std::iter::empty()).unwrap();
        let exchange = Exchange::new(&table);
        assert_eq!(exchange.to_pivot(12.5, Currency::Eur).unwrap(), 12.5);
        assert_eq!(exchange.from_pivot(12.5, Currency::Eur).unwrap(), 12.5);
    }

    #[test]
    fn test_convert_composes_through_pivot() {
        let table = doubled();
        let exchange = Exchange::new(&table);
        // 10 USD -> 20 EUR -> 40 GBP
        assert_eq!(
            exchange.convert(10.0, Currency::Usd, Currency::Gbp).unwrap(),
            40.0
        );
        // 10 EUR -> 5 USD
        assert_eq!(
            exchange.convert(10.0, Currency::Eur, Currency::Usd).unwrap(),
            5.0
        );
    }

    #[rstest]
    #[case(Currency::Eur)]
    #[case(Currency::Usd)]
    #[case(Currency::Jpy)]
    #[case(Currency::Rub)]
    fn test_convert_same_currency_is_identity(#[case] currency: Currency) {
        let exchange = Exchange::standard();
        assert_eq!(exchange.convert(123.456, currency, currency).unwrap(), 123.456);
    }

    #[test]
    fn test_convert_missing_rate_fails() {
        let exchange = Exchange::standard();
        assert_eq!(
            exchange.convert(1.0, Currency::Ars, Currency::Usd),
            Err(MoneyError::RateUnavailable(Currency::Ars))
        );
        assert_eq!(
            exchange.convert(1.0, Currency::Usd, Currency::Rub),
            Err(MoneyError::RateUnavailable(Currency::Rub))
        );
        assert_eq!(
            exchange.to_pivot(1.0, Currency::Rub),
            Err(MoneyError::RateUnavailable(Currency::Rub))
        );
    }

    #[test]
    fn test_standard_uses_reference_rates() {
        let exchange = Exchange::default();
        assert_eq!(exchange.rates().len(), 31);
        assert_eq!(exchange.rate(Currency::Usd).unwrap(), 1.0861);
        assert_eq!(exchange.to_pivot(100.0, Currency::Usd).unwrap(), 100.0 * 1.0861);
    }
}
