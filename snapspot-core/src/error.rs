use thiserror::Error;

use crate::{device::Capability, storage::StorageError};

/// Errors from the signup/login flow.
///
/// The `Display` output is the message rendered next to the form.
#[derive(Debug, Error, uniffi::Error)]
pub enum AuthError {
    /// A stored account already uses this email.
    #[error("An account with this email already exists.")]
    DuplicateAccount,
    /// Nothing has been signed up on this device.
    #[error("No account found. Please sign up first.")]
    NoAccount,
    /// The email does not match the stored account.
    #[error("Invalid email address.")]
    InvalidEmail,
    /// The password does not match the stored account.
    #[error("Invalid password.")]
    InvalidPassword,
    /// A stored account exists but cannot be read back.
    #[error("Stored account data is unreadable: {0}")]
    CorruptedRecord(String),
    /// The platform store failed.
    #[error("Request failed: {0}")]
    Storage(String),
    /// The password could not be hashed.
    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

impl From<StorageError> for AuthError {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::CorruptedRecord(reason) => Self::CorruptedRecord(reason),
            StorageError::UnsupportedRecordVersion(version) => {
                Self::CorruptedRecord(format!("unsupported record version {version}"))
            }
            other => Self::Storage(other.to_string()),
        }
    }
}

/// Errors from resolving the current address.
#[derive(Debug, Error, uniffi::Error)]
pub enum LocationError {
    /// Foreground location permission was refused.
    #[error("{}", Capability::Location.denied_message())]
    PermissionDenied,
    /// The permission prompt, GPS or another platform call failed.
    #[error("{}", Capability::Location.failure_message())]
    DeviceUnavailable {
        /// Underlying cause, kept for logs.
        reason: String,
    },
}

/// Errors from acquiring an image.
#[derive(Debug, Error, uniffi::Error)]
pub enum ImageError {
    /// The camera or photo library permission was refused.
    #[error("{}", .capability.denied_message())]
    PermissionDenied {
        /// The refused capability.
        capability: Capability,
    },
    /// The permission prompt or picker failed.
    #[error("{}", .capability.failure_message())]
    DeviceUnavailable {
        /// The capability that failed.
        capability: Capability,
        /// Underlying cause, kept for logs.
        reason: String,
    },
}

/// Errors from building a configuration.
#[derive(Debug, Error, uniffi::Error)]
pub enum ConfigError {
    /// The presented input is not valid for the requested operation.
    #[error("invalid_input_{attribute}: {reason}")]
    InvalidInput {
        /// The attribute that is invalid.
        attribute: String,
        /// The reason the input is invalid.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_faults_stay_distinguishable() {
        let corrupted: AuthError =
            StorageError::CorruptedRecord("eof".to_string()).into();
        assert!(matches!(corrupted, AuthError::CorruptedRecord(_)));

        let version: AuthError = StorageError::UnsupportedRecordVersion(3).into();
        assert!(matches!(version, AuthError::CorruptedRecord(_)));

        let backend: AuthError = StorageError::Backend("disk full".to_string()).into();
        assert!(matches!(backend, AuthError::Storage(_)));
    }

    #[test]
    fn test_image_messages_follow_capability() {
        let err = ImageError::PermissionDenied {
            capability: Capability::PhotoLibrary,
        };
        assert_eq!(
            err.to_string(),
            "Media library permission denied. Please enable photo access in settings."
        );
        let err = ImageError::DeviceUnavailable {
            capability: Capability::Camera,
            reason: "busy".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to take photo.");
    }
}
