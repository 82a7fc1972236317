//! Fixed exchange rates and pivot-based currency conversion.
//!
//! Rates are stored only against the pivot currency. Converting between
//! two non-pivot currencies always goes through the pivot.

pub mod conversion;
pub mod rates;

#[cfg(test)]
mod props;

pub use conversion::Exchange;
pub use rates::RateTable;
