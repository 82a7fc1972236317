//! Property-based tests for pivot conversion.
//!
//! - Round trip through the pivot returns the original amount
//! - Same-currency conversion is the identity
//! - Cross conversion equals the two-step pivot composition

use moneta_shared::Currency;
use proptest::prelude::*;

use super::conversion::Exchange;
use super::rates::RateTable;

/// Strategy to generate amounts, including negatives and zero.
fn amount() -> impl Strategy<Value = f64> {
    -1_000_000_000.0f64..1_000_000_000.0
}

/// Strategy to pick a currency with a reference rate.
fn rated_currency() -> impl Strategy<Value = Currency> {
    let rated: Vec<Currency> = RateTable::reference().iter().map(|(c, _)| c).collect();
    prop::sample::select(rated)
}

/// Strategy to pick any supported currency.
fn any_currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

/// Strategy to generate a positive rate.
fn positive_rate() -> impl Strategy<Value = f64> {
    0.0001f64..100_000.0
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Converting into the pivot and back returns the original amount.
    #[test]
    fn prop_pivot_round_trip(value in amount(), currency in rated_currency()) {
        let exchange = Exchange::standard();
        let pivot = exchange.to_pivot(value, currency).unwrap();
        let back = exchange.from_pivot(pivot, currency).unwrap();
        prop_assert!(close(back, value), "{} -> {} -> {}", value, pivot, back);
    }

    /// Round trip holds for arbitrary tables too.
    #[test]
    fn prop_custom_rate_round_trip(value in amount(), rate in positive_rate()) {
        let table = RateTable::new([(Currency::Usd, rate)]).unwrap();
        let exchange = Exchange::new(&table);
        let pivot = exchange.to_pivot(value, Currency::Usd).unwrap();
        prop_assert!(close(pivot, value * rate));
        let back = exchange.from_pivot(pivot, Currency::Usd).unwrap();
        prop_assert!(close(back, value));
    }

    /// Identity conversion for every supported currency, rated or not.
    #[test]
    fn prop_same_currency_identity(value in amount(), currency in any_currency()) {
        let converted = Exchange::standard().convert(value, currency, currency).unwrap();
        prop_assert!(converted.to_bits() == value.to_bits());
    }

    /// Cross conversion is the composition of both pivot steps.
    #[test]
    fn prop_convert_is_pivot_composition(
        value in amount(),
        from in rated_currency(),
        to in rated_currency(),
    ) {
        prop_assume!(from != to);
        let exchange = Exchange::standard();
        let direct = exchange.convert(value, from, to).unwrap();
        let composed = exchange
            .from_pivot(exchange.to_pivot(value, from).unwrap(), to)
            .unwrap();
        prop_assert!(direct.to_bits() == composed.to_bits());
    }
}
