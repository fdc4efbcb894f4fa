//! Error types for the credential record store.

use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors raised by the key-value store and the record store on top of it.
#[derive(Debug, Error, uniffi::Error)]
pub enum StorageError {
    /// Errors coming from the platform key-value store.
    #[error("key-value store error: {0}")]
    Backend(String),

    /// The record could not be serialized before a write.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A value is present under the record key but cannot be decoded.
    #[error("stored record is corrupted: {0}")]
    CorruptedRecord(String),

    /// The stored record was written by an unsupported format version.
    #[error("unsupported record version: {0}")]
    UnsupportedRecordVersion(u32),

    /// Unexpected `UniFFI` callback error.
    #[error("unexpected uniffi callback error: {0}")]
    UnexpectedUniFFICallbackError(String),
}

impl From<uniffi::UnexpectedUniFFICallbackError> for StorageError {
    fn from(error: uniffi::UnexpectedUniFFICallbackError) -> Self {
        Self::UnexpectedUniFFICallbackError(error.reason)
    }
}
