//! Save/load contract between money values and their storage.

use moneta_shared::MoneyRecordId;
use tracing::debug;

use super::error::StoreError;
use super::record::MoneyRecord;
use crate::money::Money;

/// Storage collaborator for money records.
///
/// Implementations own the record format on disk; the core only sees
/// [`MoneyRecord`]s and opaque [`MoneyRecordId`] handles.
pub trait MoneyStore {
    /// Persists `record`, overwriting `existing` when given, and returns
    /// the record's handle.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if `existing` names no record, or
    /// [`StoreError::Backend`] when the backend fails.
    fn save(
        &self,
        record: &MoneyRecord,
        existing: Option<MoneyRecordId>,
    ) -> Result<MoneyRecordId, StoreError>;

    /// Loads the record behind `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if there is no such record, or
    /// [`StoreError::Backend`] when the backend fails.
    fn load(&self, id: MoneyRecordId) -> Result<MoneyRecord, StoreError>;
}

impl Money {
    /// Saves this value, re-saving into the bound record when there is one,
    /// and binds it to the resulting handle.
    ///
    /// # Errors
    ///
    /// Propagates the store's error; the binding is unchanged on failure.
    pub fn save_to<S: MoneyStore + ?Sized>(
        &mut self,
        store: &S,
    ) -> Result<MoneyRecordId, StoreError> {
        let id = store.save(&MoneyRecord::from(&*self), self.binding())?;
        debug!(%id, currency = %self.currency(), "saved money record");
        self.bind(id);
        Ok(id)
    }

    /// Loads a value from `store`. The result has no discount and is bound
    /// to `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownCurrencyCode`] if the stored code names
    /// no supported currency, or the store's own error.
    pub fn load_from<S: MoneyStore + ?Sized>(
        store: &S,
        id: MoneyRecordId,
    ) -> Result<Self, StoreError> {
        let (value, currency) = store.load(id)?.decode()?;
        let mut money = Self::new(value, currency);
        money.bind(id);
        Ok(money)
    }
}
