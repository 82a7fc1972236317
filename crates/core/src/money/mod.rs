//! Money values: amount, currency and an optional percentage discount.

mod aggregate;
mod arithmetic;
mod format;
pub mod types;

#[cfg(test)]
mod props;

pub use types::{Money, MoneyDetails};
