//! In-memory key-value store.
//!
//! Nothing written here survives the process. Useful for tests and for hosts
//! that only need a session for the lifetime of the app.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{KeyValueStore, StorageError, StorageResult};

/// [`KeyValueStore`] backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    values: Mutex<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    ///
    /// # Errors
    ///
    /// Returns an error if the inner lock is poisoned.
    pub fn len(&self) -> StorageResult<usize> {
        Ok(self.lock()?.len())
    }

    /// Returns `true` when no key is held.
    ///
    /// # Errors
    ///
    /// Returns an error if the inner lock is poisoned.
    pub fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(
        &self,
    ) -> StorageResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.values
            .lock()
            .map_err(|_| StorageError::Backend("mutex poisoned".to_string()))
    }
}

#[async_trait::async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: String) -> StorageResult<Option<String>> {
        Ok(self.lock()?.get(&key).cloned())
    }

    async fn set(&self, key: String, value: String) -> StorageResult<()> {
        self.lock()?.insert(key, value);
        Ok(())
    }

    async fn remove(&self, key: String) -> StorageResult<()> {
        self.lock()?.remove(&key);
        Ok(())
    }
}
