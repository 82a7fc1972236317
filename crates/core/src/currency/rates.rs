//! Static exchange rate table.
//!
//! A rate is the number of units of a currency bought by one unit of the
//! pivot currency. The pivot itself never has an entry.

use std::collections::BTreeMap;
use std::str::FromStr;

use moneta_shared::{Currency, RatesConfig};
use once_cell::sync::Lazy;
use tracing::{debug, warn};

use crate::error::{MoneyError, MoneyResult};

/// Reference rates against EUR.
const REFERENCE_RATES: [(Currency, f64); 31] = [
    (Currency::Usd, 1.086_1),
    (Currency::Aud, 1.455_2),
    (Currency::Nok, 9.508),
    (Currency::Brl, 5.158_3),
    (Currency::Bgn, 1.955_8),
    (Currency::Cad, 1.367_5),
    (Currency::Cny, 6.911_5),
    (Currency::Nzd, 1.584_9),
    (Currency::Hrk, 7.549),
    (Currency::Czk, 24.479),
    (Currency::Dkk, 7.437_2),
    (Currency::Hkd, 8.513_4),
    (Currency::Huf, 375.66),
    (Currency::Jpy, 139.6),
    (Currency::Inr, 82.389),
    (Currency::Idr, 15_601.96),
    (Currency::Ils, 3.501),
    (Currency::Isk, 134.87),
    (Currency::Chf, 1.015_5),
    (Currency::Myr, 4.585),
    (Currency::Mxn, 21.872_9),
    (Currency::Php, 55.99),
    (Currency::Pln, 4.643_7),
    (Currency::Ron, 4.942_5),
    (Currency::Sgd, 1.480_1),
    (Currency::Try, 15.996_8),
    (Currency::Gbp, 0.833_55),
    (Currency::Krw, 1_333.12),
    (Currency::Sek, 10.276_8),
    (Currency::Thb, 36.488),
    (Currency::Zar, 16.023_7),
];

static REFERENCE: Lazy<RateTable> = Lazy::new(|| RateTable {
    rates: REFERENCE_RATES.into_iter().collect(),
});

/// Immutable mapping from non-pivot currency to its rate against the pivot.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    rates: BTreeMap<Currency, f64>,
}

impl RateTable {
    /// Returns the built-in reference table.
    #[must_use]
    pub fn reference() -> &'static Self {
        &REFERENCE
    }

    /// Builds a table from `(currency, rate)` pairs. Later pairs replace
    /// earlier ones for the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidRate`] for a rate that is not a positive
    /// finite number, or for an entry keyed by the pivot currency.
    pub fn new<I>(entries: I) -> MoneyResult<Self>
    where
        I: IntoIterator<Item = (Currency, f64)>,
    {
        let mut rates = BTreeMap::new();
        for (currency, rate) in entries {
            if currency.is_pivot() || !rate.is_finite() || rate <= 0.0 {
                return Err(MoneyError::InvalidRate { currency, rate });
            }
            rates.insert(currency, rate);
        }
        debug!(entries = rates.len(), "built rate table");
        Ok(Self { rates })
    }

    /// Builds a table from configuration: the reference rates when
    /// `use_reference` is set, with `overrides` applied on top.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::UnknownCurrency`] for an override keyed by an
    /// unsupported code and [`MoneyError::InvalidRate`] for a bad rate.
    pub fn from_config(config: &RatesConfig) -> MoneyResult<Self> {
        let base = if config.use_reference {
            REFERENCE_RATES.to_vec()
        } else {
            Vec::new()
        };

        let overrides = config
            .overrides
            .iter()
            .map(|(code, rate)| {
                Currency::from_str(code)
                    .map(|currency| (currency, *rate))
                    .map_err(|_| MoneyError::UnknownCurrency(code.clone()))
            })
            .collect::<MoneyResult<Vec<_>>>()?;

        Self::new(base.into_iter().chain(overrides))
    }

    /// Rate of `currency` against the pivot.
    ///
    /// The pivot has no entry; callers special-case it before asking.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::RateUnavailable`] when the table has no entry.
    pub fn rate(&self, currency: Currency) -> MoneyResult<f64> {
        self.rates.get(&currency).copied().ok_or_else(|| {
            warn!(%currency, "no conversion rate available");
            MoneyError::RateUnavailable(currency)
        })
    }

    /// Returns true if the table has a rate for `currency`.
    #[must_use]
    pub fn contains(&self, currency: Currency) -> bool {
        self.rates.contains_key(&currency)
    }

    /// Number of rates in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table holds no rates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterates over `(currency, rate)` pairs ordered by currency.
    pub fn iter(&self) -> impl Iterator<Item = (Currency, f64)> + '_ {
        self.rates.iter().map(|(currency, rate)| (*currency, *rate))
    }
}
