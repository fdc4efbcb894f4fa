//! Tunables for the core, with defaults matching the shipped app.

use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, storage::DEFAULT_RECORD_KEY};

/// Text shown when reverse geocoding yields nothing usable.
pub const ADDRESS_NOT_FOUND: &str = "Address not found";

/// Positioning accuracy requested from the GPS provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "snake_case")]
pub enum LocationAccuracy {
    /// Within a few kilometres.
    Lowest,
    /// Within about a kilometre.
    Low,
    /// Within a hundred metres.
    Balanced,
    /// Within ten metres.
    High,
    /// Best the device can do.
    Highest,
}

/// Options handed to the camera and photo library pickers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct CaptureOptions {
    /// Whether the picker offers a crop/edit step.
    pub allows_editing: bool,
    /// Crop aspect ratio as `[width, height]`.
    pub aspect_width: u32,
    /// See `aspect_width`.
    pub aspect_height: u32,
    /// JPEG compression quality in `0.0..=1.0`.
    pub quality: f64,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            allows_editing: true,
            aspect_width: 1,
            aspect_height: 1,
            quality: 0.8,
        }
    }
}

/// Argon2id cost parameters used when hashing new passwords.
///
/// Verification always uses the parameters embedded in the stored hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct PasswordHashing {
    /// Memory size in KiB.
    pub memory_kib: u32,
    /// Number of passes.
    pub iterations: u32,
    /// Degree of parallelism.
    pub parallelism: u32,
}

impl Default for PasswordHashing {
    fn default() -> Self {
        Self {
            memory_kib: argon2::Params::DEFAULT_M_COST,
            iterations: argon2::Params::DEFAULT_T_COST,
            parallelism: argon2::Params::DEFAULT_P_COST,
        }
    }
}

/// Configuration for [`crate::AppCore`] and its components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, uniffi::Record)]
#[serde(default)]
pub struct SnapSpotConfig {
    /// Key the user record is stored under.
    pub record_key: String,
    /// Address text used when geocoding finds nothing.
    pub address_fallback: String,
    /// Accuracy requested for position fixes.
    pub location_accuracy: LocationAccuracy,
    /// Picker options for camera and library acquisition.
    pub capture: CaptureOptions,
    /// Width recorded for photos adopted from the in-app viewfinder.
    pub adopted_photo_width: u32,
    /// Height recorded for photos adopted from the in-app viewfinder.
    pub adopted_photo_height: u32,
    /// Password hashing cost.
    pub password_hashing: PasswordHashing,
}

impl Default for SnapSpotConfig {
    fn default() -> Self {
        Self {
            record_key: DEFAULT_RECORD_KEY.to_string(),
            address_fallback: ADDRESS_NOT_FOUND.to_string(),
            location_accuracy: LocationAccuracy::High,
            capture: CaptureOptions::default(),
            adopted_photo_width: 400,
            adopted_photo_height: 300,
            password_hashing: PasswordHashing::default(),
        }
    }
}

impl SnapSpotConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value is out of range.
    pub fn from_json(config: &str) -> Result<Self, ConfigError> {
        let parsed: Self =
            serde_json::from_str(config).map_err(|err| ConfigError::InvalidInput {
                attribute: "config".to_string(),
                reason: err.to_string(),
            })?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// Checks values that serde cannot.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid attribute.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.record_key.trim().is_empty() {
            return Err(invalid("record_key", "must not be empty"));
        }
        if !(0.0..=1.0).contains(&self.capture.quality) {
            return Err(invalid("capture.quality", "must be within 0.0..=1.0"));
        }
        if self.capture.aspect_width == 0 || self.capture.aspect_height == 0 {
            return Err(invalid("capture.aspect", "must be non-zero"));
        }
        let hashing = self.password_hashing;
        argon2::Params::new(
            hashing.memory_kib,
            hashing.iterations,
            hashing.parallelism,
            None,
        )
        .map_err(|err| invalid("password_hashing", &err.to_string()))?;
        Ok(())
    }
}

/// Parses a [`SnapSpotConfig`] from JSON. Exposed for foreign callers.
///
/// # Errors
///
/// See [`SnapSpotConfig::from_json`].
#[uniffi::export]
pub fn config_from_json(config: &str) -> Result<SnapSpotConfig, ConfigError> {
    SnapSpotConfig::from_json(config)
}

/// Returns the default configuration.
#[uniffi::export]
#[must_use]
pub fn default_config() -> SnapSpotConfig {
    SnapSpotConfig::default()
}

fn invalid(attribute: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidInput {
        attribute: attribute.to_string(),
        reason: reason.to_string(),
    }
}
