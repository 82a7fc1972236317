//! In-memory money store.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use moneta_shared::MoneyRecordId;

use super::error::StoreError;
use super::record::MoneyRecord;
use super::store::MoneyStore;

/// Thread-safe [`MoneyStore`] backed by a concurrent map.
#[derive(Debug, Default)]
pub struct InMemoryMoneyStore {
    records: DashMap<MoneyRecordId, MoneyRecord>,
}

impl InMemoryMoneyStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl MoneyStore for InMemoryMoneyStore {
    fn save(
        &self,
        record: &MoneyRecord,
        existing: Option<MoneyRecordId>,
    ) -> Result<MoneyRecordId, StoreError> {
        match existing {
            Some(id) => match self.records.entry(id) {
                Entry::Occupied(mut entry) => {
                    entry.insert(*record);
                    Ok(id)
                }
                Entry::Vacant(_) => Err(StoreError::NotFound(id)),
            },
            None => {
                let id = MoneyRecordId::new();
                self.records.insert(id, *record);
                Ok(id)
            }
        }
    }

    fn load(&self, id: MoneyRecordId) -> Result<MoneyRecord, StoreError> {
        self.records
            .get(&id)
            .map(|record| *record)
            .ok_or(StoreError::NotFound(id))
    }
}
