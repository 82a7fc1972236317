//! Persistence collaborator contract.
//!
//! The core never talks to a database. It converts money values to and
//! from [`MoneyRecord`]s and hands them to a [`MoneyStore`] implementation
//! owned by the host application.
//!
//! ```text
//! Money ──save_to──▶ MoneyRecord { value, currency_code } ──▶ MoneyStore
//! Money ◀─load_from─ (value, Currency) ◀──decode─────────── MoneyStore
//! ```

mod error;
mod memory;
mod record;
mod store;

pub use error::StoreError;
pub use memory::InMemoryMoneyStore;
pub use record::MoneyRecord;
pub use store::MoneyStore;
