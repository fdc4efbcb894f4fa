//! Shared vocabulary for the device capabilities the host provides.

use strum::Display;
use thiserror::Error;

/// Outcome of a runtime permission prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum PermissionStatus {
    /// The user allowed access.
    Granted,
    /// The user refused access.
    Denied,
    /// The platform has not recorded a decision; treated as a refusal.
    Undetermined,
}

impl PermissionStatus {
    /// Only an explicit grant counts.
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// A device capability guarded by its own permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, uniffi::Enum)]
#[strum(serialize_all = "snake_case")]
pub enum Capability {
    /// Foreground GPS position and reverse geocoding.
    Location,
    /// Live camera capture.
    Camera,
    /// Selection from the photo library.
    PhotoLibrary,
}

impl Capability {
    /// Message shown when the permission prompt is refused.
    #[must_use]
    pub const fn denied_message(self) -> &'static str {
        match self {
            Self::Location => {
                "Location permission denied. Please enable location access in settings."
            }
            Self::Camera => {
                "Camera permission denied. Please enable camera access in settings."
            }
            Self::PhotoLibrary => {
                "Media library permission denied. Please enable photo access in settings."
            }
        }
    }

    /// Message shown for any lower-level platform failure.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Location => "Failed to get location.",
            Self::Camera => "Failed to take photo.",
            Self::PhotoLibrary => "Failed to pick image.",
        }
    }
}

/// Errors raised by host-implemented device providers.
#[derive(Debug, Clone, Error, uniffi::Error)]
pub enum DeviceError {
    /// The platform call failed (sensor off, picker crashed, geocoder offline, ...).
    #[error("device unavailable: {0}")]
    Unavailable(String),

    /// Unexpected `UniFFI` callback error.
    #[error("unexpected uniffi callback error: {0}")]
    UnexpectedUniFFICallbackError(String),
}

impl From<uniffi::UnexpectedUniFFICallbackError> for DeviceError {
    fn from(error: uniffi::UnexpectedUniFFICallbackError) -> Self {
        Self::UnexpectedUniFFICallbackError(error.reason)
    }
}
