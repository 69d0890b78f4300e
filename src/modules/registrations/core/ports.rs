// Ports define what the registration core needs from the outside world.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits.

use crate::modules::registrations::core::record::RegistrationRecord;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("citizen {citizen_id} is already registered")]
    AlreadyExists { citizen_id: String },

    #[error("backend error: {0}")]
    Backend(String),
}

/// Key-value store of accepted registrations, keyed by citizen ID.
#[async_trait]
pub trait RegistrationStore: Send + Sync {
    async fn contains(&self, citizen_id: &str) -> Result<bool, StoreError>;

    /// Inserts the record unless its citizen ID is taken. The check and the
    /// write happen under one lock, so a lost race returns `AlreadyExists`.
    async fn insert(&self, record: RegistrationRecord) -> Result<(), StoreError>;

    async fn get(&self, citizen_id: &str) -> Result<Option<RegistrationRecord>, StoreError>;

    /// All records ordered by citizen ID.
    async fn list(&self) -> Result<Vec<RegistrationRecord>, StoreError>;

    /// Releases a citizen ID. Returns whether a record was removed.
    async fn remove(&self, citizen_id: &str) -> Result<bool, StoreError>;
}
