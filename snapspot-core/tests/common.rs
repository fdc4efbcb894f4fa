//! Common test utilities shared across integration tests.
#![allow(dead_code, missing_docs)]

use std::sync::{Arc, Mutex};

use snapspot_core::{
    storage::InMemoryKeyValueStore, AppCore, CaptureOptions, Coordinates, DeviceError,
    GeocodedAddress, ImageAsset, ImageProvider, LocationAccuracy, LocationProvider,
    PasswordHashing, PermissionStatus, SnapSpotConfig,
};

/// Location provider answering from fixed fields the test can change.
pub struct FakeGps {
    pub permission: Mutex<PermissionStatus>,
    pub position: Coordinates,
    pub candidates: Mutex<Vec<GeocodedAddress>>,
}

impl FakeGps {
    pub fn new(position: Coordinates, candidates: Vec<GeocodedAddress>) -> Self {
        Self {
            permission: Mutex::new(PermissionStatus::Granted),
            position,
            candidates: Mutex::new(candidates),
        }
    }
}

#[async_trait::async_trait]
impl LocationProvider for FakeGps {
    async fn request_foreground_permission(&self) -> Result<PermissionStatus, DeviceError> {
        Ok(*self.permission.lock().unwrap())
    }

    async fn current_position(
        &self,
        _accuracy: LocationAccuracy,
    ) -> Result<Coordinates, DeviceError> {
        Ok(self.position)
    }

    async fn reverse_geocode(
        &self,
        _coordinates: Coordinates,
    ) -> Result<Vec<GeocodedAddress>, DeviceError> {
        Ok(self.candidates.lock().unwrap().clone())
    }
}

/// Image provider whose next camera/library result is set by the test.
/// `None` simulates the user backing out.
#[derive(Default)]
pub struct FakeCamera {
    pub next_capture: Mutex<Option<ImageAsset>>,
    pub next_pick: Mutex<Option<ImageAsset>>,
}

#[async_trait::async_trait]
impl ImageProvider for FakeCamera {
    async fn request_camera_permission(&self) -> Result<PermissionStatus, DeviceError> {
        Ok(PermissionStatus::Granted)
    }

    async fn request_media_library_permission(
        &self,
    ) -> Result<PermissionStatus, DeviceError> {
        Ok(PermissionStatus::Granted)
    }

    async fn launch_camera(
        &self,
        _options: CaptureOptions,
    ) -> Result<Option<ImageAsset>, DeviceError> {
        Ok(self.next_capture.lock().unwrap().take())
    }

    async fn launch_library(
        &self,
        _options: CaptureOptions,
    ) -> Result<Option<ImageAsset>, DeviceError> {
        Ok(self.next_pick.lock().unwrap().take())
    }
}

pub fn photo(uri: &str) -> ImageAsset {
    ImageAsset {
        uri: uri.to_string(),
        width: Some(1024),
        height: Some(1024),
        media_type: Some("image".to_string()),
    }
}

pub fn dankaur() -> GeocodedAddress {
    GeocodedAddress {
        street_number: Some("9H22+P2".to_string()),
        street: Some(String::new()),
        city: Some("Dankaur".to_string()),
        region: Some("Uttar Pradesh".to_string()),
        postal_code: Some("203201".to_string()),
    }
}

pub const DANKAUR: Coordinates = Coordinates {
    latitude: 28.349_5,
    longitude: 77.553_6,
};

/// Low Argon2 cost so tests stay fast.
pub fn test_config() -> SnapSpotConfig {
    SnapSpotConfig {
        password_hashing: PasswordHashing {
            memory_kib: 8,
            iterations: 1,
            parallelism: 1,
        },
        ..SnapSpotConfig::default()
    }
}

pub struct Device {
    pub store: Arc<InMemoryKeyValueStore>,
    pub gps: Arc<FakeGps>,
    pub camera: Arc<FakeCamera>,
}

impl Device {
    pub fn new() -> Self {
        Self {
            store: Arc::new(InMemoryKeyValueStore::new()),
            gps: Arc::new(FakeGps::new(DANKAUR, vec![dankaur()])),
            camera: Arc::new(FakeCamera::default()),
        }
    }

    /// Boots a fresh core against this device, as on app launch.
    pub fn boot(&self) -> Arc<AppCore> {
        AppCore::new(
            self.store.clone(),
            self.gps.clone(),
            self.camera.clone(),
            test_config(),
        )
        .expect("valid config")
    }
}
