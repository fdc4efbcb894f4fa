use crate::{config::LocationAccuracy, device::DeviceError, device::PermissionStatus};

/// A position fix in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, uniffi::Record)]
pub struct Coordinates {
    /// Degrees north of the equator.
    pub latitude: f64,
    /// Degrees east of Greenwich.
    pub longitude: f64,
}

/// One reverse-geocoding candidate as reported by the platform geocoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, uniffi::Record)]
pub struct GeocodedAddress {
    /// House number or plus code.
    pub street_number: Option<String>,
    /// Street name.
    pub street: Option<String>,
    /// City or town.
    pub city: Option<String>,
    /// State, province or region.
    pub region: Option<String>,
    /// Postal or ZIP code.
    pub postal_code: Option<String>,
}

/// GPS and geocoding services of the host platform.
#[uniffi::export(with_foreign)]
#[async_trait::async_trait]
pub trait LocationProvider: Send + Sync {
    /// Prompts for foreground location access (or returns the remembered answer).
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt itself fails.
    async fn request_foreground_permission(&self) -> Result<PermissionStatus, DeviceError>;

    /// Reads the current device position.
    ///
    /// # Errors
    ///
    /// Returns an error if no fix can be obtained.
    async fn current_position(
        &self,
        accuracy: LocationAccuracy,
    ) -> Result<Coordinates, DeviceError>;

    /// Translates `coordinates` into zero or more address candidates, best first.
    ///
    /// # Errors
    ///
    /// Returns an error if the geocoder fails.
    async fn reverse_geocode(
        &self,
        coordinates: Coordinates,
    ) -> Result<Vec<GeocodedAddress>, DeviceError>;
}
