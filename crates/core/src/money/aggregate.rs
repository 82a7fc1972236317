//! Aggregation over collections of money values in mixed currencies.
//!
//! Amounts are always normalized to the pivot currency before they are
//! summed or compared. Raw values are never compared across currencies.

use moneta_shared::Currency;
use tracing::debug;

use super::types::Money;
use crate::currency::Exchange;
use crate::error::{MoneyError, MoneyResult};

impl Money {
    /// Sum of `moneys` expressed in `target`.
    ///
    /// An empty collection sums to zero.
    ///
    /// # Errors
    ///
    /// Returns `RateUnavailable` if any element or `target` lacks a rate.
    pub fn total(moneys: &[Self], target: Currency) -> MoneyResult<Self> {
        Self::total_with(moneys, target, &Exchange::standard())
    }

    /// Sum of `moneys` expressed in the pivot currency.
    ///
    /// # Errors
    ///
    /// Returns `RateUnavailable` if any element lacks a rate.
    pub fn total_in_pivot(moneys: &[Self]) -> MoneyResult<Self> {
        Self::total(moneys, Currency::PIVOT)
    }

    /// [`Money::total`] using the given engine.
    ///
    /// # Errors
    ///
    /// Returns `RateUnavailable` if any element or `target` lacks a rate.
    pub fn total_with(
        moneys: &[Self],
        target: Currency,
        exchange: &Exchange<'_>,
    ) -> MoneyResult<Self> {
        let pivot_sum = moneys.iter().try_fold(0.0, |sum, money| {
            money.pivot_value_with(exchange).map(|value| sum + value)
        })?;
        let total = exchange.from_pivot(pivot_sum, target)?;
        debug!(count = moneys.len(), %target, total, "computed money total");
        Ok(Self::new(total, target))
    }

    /// Mean of `moneys` expressed in `target`.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCollection` for an empty slice and `RateUnavailable`
    /// if any element or `target` lacks a rate.
    pub fn average(moneys: &[Self], target: Currency) -> MoneyResult<Self> {
        Self::average_with(moneys, target, &Exchange::standard())
    }

    /// [`Money::average`] using the given engine.
    ///
    /// # Errors
    ///
    /// Same as [`Money::average`].
    pub fn average_with(
        moneys: &[Self],
        target: Currency,
        exchange: &Exchange<'_>,
    ) -> MoneyResult<Self> {
        if moneys.is_empty() {
            return Err(MoneyError::EmptyCollection);
        }
        let total = Self::total_with(moneys, target, exchange)?;
        #[allow(clippy::cast_precision_loss)]
        let count = moneys.len() as f64;
        Ok(Self::new(total.original_value() / count, target))
    }

    /// Element with the largest pivot-equivalent value; the first one wins
    /// on ties.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCollection` for an empty slice and `RateUnavailable`
    /// if any element lacks a rate.
    pub fn highest(moneys: &[Self]) -> MoneyResult<&Self> {
        Self::highest_with(moneys, &Exchange::standard())
    }

    /// [`Money::highest`] using the given engine.
    ///
    /// # Errors
    ///
    /// Same as [`Money::highest`].
    pub fn highest_with<'m>(moneys: &'m [Self], exchange: &Exchange<'_>) -> MoneyResult<&'m Self> {
        Self::extreme_by(moneys, exchange, |candidate, best| candidate > best)
    }

    /// Element with the smallest pivot-equivalent value; the first one wins
    /// on ties.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCollection` for an empty slice and `RateUnavailable`
    /// if any element lacks a rate.
    pub fn lowest(moneys: &[Self]) -> MoneyResult<&Self> {
        Self::lowest_with(moneys, &Exchange::standard())
    }

    /// [`Money::lowest`] using the given engine.
    ///
    /// # Errors
    ///
    /// Same as [`Money::lowest`].
    pub fn lowest_with<'m>(moneys: &'m [Self], exchange: &Exchange<'_>) -> MoneyResult<&'m Self> {
        Self::extreme_by(moneys, exchange, |candidate, best| candidate < best)
    }

    /// Linear scan keeping the element for which `replaces(candidate, best)`
    /// last held. Strict comparisons keep the first-seen element on ties.
    fn extreme_by<'m>(
        moneys: &'m [Self],
        exchange: &Exchange<'_>,
        replaces: impl Fn(f64, f64) -> bool,
    ) -> MoneyResult<&'m Self> {
        let (first, rest) = moneys.split_first().ok_or(MoneyError::EmptyCollection)?;
        let mut best = first;
        let mut best_value = first.pivot_value_with(exchange)?;
        for money in rest {
            let value = money.pivot_value_with(exchange)?;
            if replaces(value, best_value) {
                best = money;
                best_value = value;
            }
        }
        Ok(best)
    }
}
