//! Common types used across the workspace.

pub mod currency;
pub mod id;

pub use currency::Currency;
pub use id::MoneyRecordId;
