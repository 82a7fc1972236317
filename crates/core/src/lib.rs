//! Core money logic for Moneta.
//!
//! This crate contains pure, synchronous logic with ZERO I/O.
//!
//! # Modules
//!
//! - `currency` - Fixed rate table and pivot-based conversion
//! - `money` - Money values with discount, arithmetic and aggregation
//! - `persistence` - Save/load contract with an external store
//!
//! # Example
//!
//! ```
//! use moneta_core::{Money, MoneyError};
//! use moneta_shared::Currency;
//!
//! let mut price = Money::new(100.0, Currency::Eur);
//! price.set_discount(20)?;
//! assert!((price.value() - 80.0).abs() < f64::EPSILON);
//!
//! let total = Money::total(&[price, Money::new(5.0, Currency::Eur)], Currency::Eur)?;
//! assert_eq!(total.formatted(), "€ 105.00");
//! # Ok::<(), MoneyError>(())
//! ```

pub mod currency;
pub mod error;
pub mod money;
pub mod persistence;

pub use currency::{Exchange, RateTable};
pub use error::{MoneyError, MoneyResult};
pub use money::{Money, MoneyDetails};
pub use persistence::{InMemoryMoneyStore, MoneyRecord, MoneyStore, StoreError};
