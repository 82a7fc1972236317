//! Property-based tests for money values.
//!
//! - Discount derivation from the stored amount
//! - Add/subtract agree with converting the operand first
//! - Aggregation extremes bound every element

use moneta_shared::Currency;
use proptest::prelude::*;

use super::types::Money;
use crate::currency::RateTable;
use crate::error::MoneyError;

/// Strategy to generate amounts, including negatives and zero.
fn amount() -> impl Strategy<Value = f64> {
    -1_000_000.0f64..1_000_000.0
}

/// Strategy to pick a currency convertible with the reference rates.
fn rated_currency() -> impl Strategy<Value = Currency> {
    let mut rated: Vec<Currency> = RateTable::reference().iter().map(|(c, _)| c).collect();
    rated.push(Currency::PIVOT);
    prop::sample::select(rated)
}

/// Strategy to generate a money value with an arbitrary discount.
fn money() -> impl Strategy<Value = Money> {
    (amount(), rated_currency(), 0i32..=100).prop_map(|(value, currency, discount)| {
        Money::new(value, currency).with_discount(discount).unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Effective value is the stored amount minus the discount share.
    #[test]
    fn prop_discount_derivation(value in amount(), discount in 0i32..=100) {
        let money = Money::pivot(value).with_discount(discount).unwrap();
        let share = value * f64::from(discount) / 100.0;
        prop_assert_eq!(money.discount_value().to_bits(), share.to_bits());
        prop_assert_eq!(money.original_value().to_bits(), value.to_bits());
        let expected = if discount > 0 { value - share } else { value };
        prop_assert_eq!(money.value().to_bits(), expected.to_bits());
    }

    /// Discounts outside 0..=100 are rejected and leave the value intact.
    #[test]
    fn prop_invalid_discount_rejected(
        value in amount(),
        percent in prop_oneof![i32::MIN..0, 101..i32::MAX],
    ) {
        let mut money = Money::pivot(value);
        prop_assert_eq!(
            money.set_discount(percent).err(),
            Some(MoneyError::InvalidDiscount(percent))
        );
        prop_assert_eq!(money.discount(), 0);
    }

    /// `a + b` equals `a` plus `b` converted into `a`'s currency.
    #[test]
    fn prop_add_matches_converted_operand(a in money(), b in money()) {
        let sum = a.add(&b).unwrap();
        let converted = b.convert(a.currency()).unwrap();
        let expected = a.original_value() + converted.value();
        prop_assert_eq!(sum.value().to_bits(), expected.to_bits());
        prop_assert_eq!(sum.currency(), a.currency());
        prop_assert_eq!(sum.discount(), 0);
    }

    /// `a - b` equals `a` minus `b` converted into `a`'s currency.
    #[test]
    fn prop_subtract_matches_converted_operand(a in money(), b in money()) {
        let diff = a.subtract(&b).unwrap();
        let converted = b.convert(a.currency()).unwrap();
        let expected = a.original_value() - converted.value();
        prop_assert_eq!(diff.value().to_bits(), expected.to_bits());
        prop_assert_eq!(diff.currency(), a.currency());
    }

    /// Highest and lowest bound every element by pivot value.
    #[test]
    fn prop_extremes_bound_all(moneys in prop::collection::vec(money(), 1..20)) {
        let highest = Money::highest(&moneys).unwrap().pivot_value().unwrap();
        let lowest = Money::lowest(&moneys).unwrap().pivot_value().unwrap();
        for money in &moneys {
            let value = money.pivot_value().unwrap();
            prop_assert!(value <= highest);
            prop_assert!(value >= lowest);
        }
    }

    /// Total in the pivot equals the sum of pivot values.
    #[test]
    fn prop_total_in_pivot(moneys in prop::collection::vec(money(), 0..20)) {
        let total = Money::total_in_pivot(&moneys).unwrap();
        prop_assert_eq!(total.currency(), Currency::PIVOT);
        let expected = moneys
            .iter()
            .map(|m| m.pivot_value().unwrap())
            .fold(0.0, |sum, v| sum + v);
        prop_assert_eq!(total.value().to_bits(), expected.to_bits());
    }
}
