use crate::models::UserRecord;
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("User store lock poisoned")]
    LockPoisoned,
}

/// Result of an upsert, observed under the same write lock
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertOutcome {
    /// The record previously stored under the same key
    pub replaced: Option<UserRecord>,
    /// Number of records in the store right after the write
    pub total: usize,
}

/// Repository trait for user records
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All records, in the order their keys were first stored
    async fn list(&self) -> Result<Vec<UserRecord>, StoreError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<UserRecord>, StoreError>;
    /// Store `record` under its key, replacing any previous record in full
    async fn upsert(&self, record: UserRecord) -> Result<UpsertOutcome, StoreError>;
}

/// In-memory repository; contents live as long as the process
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<IndexMap<String, UserRecord>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<UserRecord>, StoreError> {
        let users = self.users.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<UserRecord>, StoreError> {
        let users = self.users.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(users.get(id).cloned())
    }

    async fn upsert(&self, record: UserRecord) -> Result<UpsertOutcome, StoreError> {
        let mut users = self.users.write().map_err(|_| StoreError::LockPoisoned)?;
        // IndexMap::insert keeps the existing slot for a known key
        let replaced = users.insert(record.key().to_string(), record);
        Ok(UpsertOutcome {
            replaced,
            total: users.len(),
        })
    }
}
