//! Single-slot persistence of the user record.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{
    error::{StorageError, StorageResult},
    traits::KeyValueStore,
};

const RECORD_VERSION: u32 = 1;

/// The persisted account. Only one ever exists.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredUser {
    /// Opaque identifier generated at signup.
    pub id: String,
    /// Display name given at signup.
    pub full_name: String,
    /// Lookup key, compared exactly.
    pub email: String,
    /// Argon2id hash of the password in PHC string format.
    pub password_hash: String,
    /// Unix seconds at signup.
    pub created_at: u64,
}

impl std::fmt::Debug for StoredUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredUser")
            .field("id", &self.id)
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}

#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

#[derive(Serialize, Deserialize)]
struct RecordEnvelope {
    version: u32,
    user: StoredUser,
}

impl RecordEnvelope {
    const fn new(user: StoredUser) -> Self {
        Self {
            version: RECORD_VERSION,
            user,
        }
    }

    fn serialize(&self) -> StorageResult<String> {
        serde_json::to_string(self)
            .map_err(|err| StorageError::Serialization(err.to_string()))
    }

    fn deserialize(raw: &str) -> StorageResult<Self> {
        let probe: VersionProbe = serde_json::from_str(raw)
            .map_err(|err| StorageError::CorruptedRecord(err.to_string()))?;
        if probe.version != RECORD_VERSION {
            return Err(StorageError::UnsupportedRecordVersion(probe.version));
        }
        serde_json::from_str(raw)
            .map_err(|err| StorageError::CorruptedRecord(err.to_string()))
    }
}

/// Reads and writes the one [`StoredUser`] kept under a fixed key.
pub struct CredentialRecordStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl CredentialRecordStore {
    /// Wraps `store`, keeping the record under `key`.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Returns the storage key in use.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Loads the stored record.
    ///
    /// `Ok(None)` means nothing is stored. A value that is present but
    /// unreadable is an error, never `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails or the stored value cannot be decoded.
    pub async fn load(&self) -> StorageResult<Option<StoredUser>> {
        let Some(raw) = self.store.get(self.key.clone()).await? else {
            return Ok(None);
        };
        let envelope = RecordEnvelope::deserialize(&raw)?;
        Ok(Some(envelope.user))
    }

    /// Persists `user`, replacing whatever was stored before.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub async fn save(&self, user: &StoredUser) -> StorageResult<()> {
        let raw = RecordEnvelope::new(user.clone()).serialize()?;
        self.store.set(self.key.clone(), raw).await
    }

    /// Removes the stored record, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub async fn clear(&self) -> StorageResult<()> {
        self.store.remove(self.key.clone()).await
    }

    /// Returns `true` if a value is present under the record key, without decoding it.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    pub async fn exists(&self) -> StorageResult<bool> {
        Ok(self.store.get(self.key.clone()).await?.is_some())
    }
}
