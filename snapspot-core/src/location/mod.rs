//! "Where am I" for tagging a photo: permission, GPS fix, reverse geocoding,
//! formatted into one display string.

mod address;
mod provider;

pub use address::{address_from_candidates, format_address};
pub use provider::{Coordinates, GeocodedAddress, LocationProvider};

use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use crate::{
    config::{LocationAccuracy, SnapSpotConfig},
    error::{ConfigError, LocationError},
};

/// A resolved position and its display address.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct ResolvedLocation {
    /// Position fix.
    pub coordinates: Coordinates,
    /// Formatted address, or the fallback text.
    pub address: String,
}

/// Snapshot of the location widget state.
#[derive(Debug, Clone, Default, PartialEq, uniffi::Record)]
pub struct LocationState {
    /// Last resolved position.
    pub coordinates: Option<Coordinates>,
    /// Last resolved address.
    pub address: Option<String>,
    /// `true` while a resolution is in flight.
    pub is_loading: bool,
    /// Last failure message.
    pub error: Option<String>,
}

/// Resolves the device's current street address on demand. Nothing is cached
/// between calls.
#[derive(uniffi::Object)]
pub struct LocationResolver {
    provider: Arc<dyn LocationProvider>,
    accuracy: LocationAccuracy,
    fallback: String,
    state: RwLock<LocationState>,
}

#[uniffi::export]
impl LocationResolver {
    /// Creates a resolver over the platform `provider`.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid.
    #[uniffi::constructor]
    pub fn new(
        provider: Arc<dyn LocationProvider>,
        config: SnapSpotConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            provider,
            accuracy: config.location_accuracy,
            fallback: config.address_fallback,
            state: RwLock::new(LocationState::default()),
        })
    }

    /// Requests permission, reads the position and reverse-geocodes it.
    ///
    /// A geocoder that fails or finds nothing is not an error: the address is
    /// the fallback text.
    ///
    /// # Errors
    ///
    /// [`LocationError::PermissionDenied`] if access is refused,
    /// [`LocationError::DeviceUnavailable`] if the prompt or GPS fails. Either
    /// clears the previously resolved location.
    pub async fn resolve_current_location(&self) -> Result<ResolvedLocation, LocationError> {
        {
            let mut state = self.write_state();
            state.is_loading = true;
            state.error = None;
        }

        let result = self.resolve().await;
        {
            let mut state = self.write_state();
            state.is_loading = false;
            match &result {
                Ok(resolved) => {
                    state.coordinates = Some(resolved.coordinates);
                    state.address = Some(resolved.address.clone());
                    state.error = None;
                }
                Err(err) => {
                    state.coordinates = None;
                    state.address = None;
                    state.error = Some(err.to_string());
                }
            }
        }
        if let Err(err) = &result {
            log::warn!("location resolution failed: {err}");
        }
        result
    }

    /// Forgets the resolved location and any error.
    pub fn clear_location(&self) {
        *self.write_state() = LocationState::default();
    }

    /// Clears the last error message.
    pub fn clear_error(&self) {
        self.write_state().error = None;
    }

    /// Returns a snapshot of the resolver state.
    #[must_use]
    pub fn state(&self) -> LocationState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LocationResolver {
    async fn resolve(&self) -> Result<ResolvedLocation, LocationError> {
        let status = self
            .provider
            .request_foreground_permission()
            .await
            .map_err(|err| LocationError::DeviceUnavailable {
                reason: err.to_string(),
            })?;
        if !status.is_granted() {
            return Err(LocationError::PermissionDenied);
        }

        let coordinates = self
            .provider
            .current_position(self.accuracy)
            .await
            .map_err(|err| LocationError::DeviceUnavailable {
                reason: err.to_string(),
            })?;

        let candidates = match self.provider.reverse_geocode(coordinates).await {
            Ok(candidates) => candidates,
            Err(err) => {
                log::warn!("reverse geocoding failed, using fallback address: {err}");
                Vec::new()
            }
        };
        log::debug!("reverse geocoding returned {} candidates", candidates.len());

        Ok(ResolvedLocation {
            coordinates,
            address: address_from_candidates(&candidates, &self.fallback),
        })
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, LocationState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Formats a geocoding candidate. Exposed for foreign callers.
#[uniffi::export]
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn format_geocoded_address(address: GeocodedAddress) -> Option<String> {
    format_address(&address)
}
