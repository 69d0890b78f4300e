// In memory implementation of the RegistrationStore port.
//
// Purpose
// - Back the service and its tests without a database.
//
// Responsibilities
// - Keep records in a map ordered by citizen ID.
// - Refuse a second insert for the same citizen ID.

use crate::modules::registrations::core::ports::{RegistrationStore, StoreError};
use crate::modules::registrations::core::record::RegistrationRecord;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryRegistrationStore {
    records: RwLock<BTreeMap<String, RegistrationRecord>>,
    is_offline: bool,
}

impl InMemoryRegistrationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Registration store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl RegistrationStore for InMemoryRegistrationStore {
    async fn contains(&self, citizen_id: &str) -> Result<bool, StoreError> {
        self.ensure_online()?;
        Ok(self.records.read().await.contains_key(citizen_id))
    }

    async fn insert(&self, record: RegistrationRecord) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.records.write().await;
        match guard.entry(record.citizen_id.clone()) {
            Entry::Occupied(entry) => Err(StoreError::AlreadyExists {
                citizen_id: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(record);
                Ok(())
            }
        }
    }

    async fn get(&self, citizen_id: &str) -> Result<Option<RegistrationRecord>, StoreError> {
        self.ensure_online()?;
        Ok(self.records.read().await.get(citizen_id).cloned())
    }

    async fn list(&self) -> Result<Vec<RegistrationRecord>, StoreError> {
        self.ensure_online()?;
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn remove(&self, citizen_id: &str) -> Result<bool, StoreError> {
        self.ensure_online()?;
        Ok(self.records.write().await.remove(citizen_id).is_some())
    }
}
