//! Credential persistence: the platform key-value boundary and the single
//! user record kept on top of it.

pub mod error;
pub mod memory;
pub mod record;
pub mod traits;

pub use error::{StorageError, StorageResult};
pub use memory::InMemoryKeyValueStore;
pub use record::{CredentialRecordStore, StoredUser};
pub use traits::KeyValueStore;

/// Storage key the original app used for the user record.
pub const DEFAULT_RECORD_KEY: &str = "userData";
