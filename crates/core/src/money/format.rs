//! Locale-invariant amount formatting.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds `value` half away from zero at `decimals` places.
///
/// Returns `None` for values `Decimal` cannot hold (NaN, infinities,
/// magnitudes beyond ~7.9e28).
pub(crate) fn round_for_display(value: f64, decimals: u32) -> Option<Decimal> {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero))
}

/// Formats `value` with fixed decimals and `,` as the thousands separator.
pub(crate) fn format_amount(value: f64, decimals: u32) -> String {
    let places = decimals as usize;
    let (negative, digits) = match round_for_display(value, decimals) {
        Some(rounded) => (
            rounded.is_sign_negative() && !rounded.is_zero(),
            format!("{:.*}", places, rounded.abs()),
        ),
        None if value.is_finite() => (value < 0.0, format!("{:.*}", places, value.abs())),
        None => return value.to_string(),
    };

    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}
