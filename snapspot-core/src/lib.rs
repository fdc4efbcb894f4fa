#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
//! Core of the `SnapSpot` app: a single local account, the current street
//! address, and one photo to tag with it.
//!
//! The host app supplies the device through foreign traits
//! ([`storage::KeyValueStore`], [`LocationProvider`], [`ImageProvider`],
//! [`logger::Logger`]) and renders the state snapshots the components expose.
//!
//! ```rust,ignore
//! let core = AppCore::new(store, gps, camera, SnapSpotConfig::default())?;
//! match core.start().await {
//!     LaunchRoute::Dashboard => show_dashboard(core.session_cache().current_user()),
//!     LaunchRoute::Login => show_login(),
//! }
//! ```

use std::sync::Arc;

pub mod config;
pub use config::{
    config_from_json, default_config, CaptureOptions, LocationAccuracy, PasswordHashing,
    SnapSpotConfig,
};

mod device;
pub use device::{Capability, DeviceError, PermissionStatus};

mod error;
pub use error::*;

pub mod image;
pub use image::{ImageAcquisitionManager, ImageAsset, ImageProvider, ImageSelection, ImageState};

pub mod location;
pub use location::{
    Coordinates, GeocodedAddress, LocationProvider, LocationResolver, LocationState,
    ResolvedLocation,
};

pub mod logger;

pub mod session;
pub use session::{LaunchRoute, SessionCache, SessionManager, SessionObserver, SessionState, User};

pub mod storage;

pub mod validation;

#[cfg(test)]
mod test_support;

/// Wires every component to one shared session cache.
#[derive(uniffi::Object)]
pub struct AppCore {
    cache: Arc<SessionCache>,
    session: Arc<SessionManager>,
    location: Arc<LocationResolver>,
    images: Arc<ImageAcquisitionManager>,
}

#[uniffi::export]
impl AppCore {
    /// Builds all components from the platform services and `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid.
    #[uniffi::constructor]
    pub fn new(
        store: Arc<dyn storage::KeyValueStore>,
        location_provider: Arc<dyn LocationProvider>,
        image_provider: Arc<dyn ImageProvider>,
        config: SnapSpotConfig,
    ) -> Result<Arc<Self>, ConfigError> {
        let cache = Arc::new(SessionCache::new());
        let session = Arc::new(SessionManager::new(store, Arc::clone(&cache), config.clone())?);
        let location = Arc::new(LocationResolver::new(location_provider, config.clone())?);
        let images = Arc::new(ImageAcquisitionManager::new(image_provider, config)?);
        Ok(Arc::new(Self {
            cache,
            session,
            location,
            images,
        }))
    }

    /// Restores any stored session and returns the screen to open first.
    pub async fn start(&self) -> LaunchRoute {
        self.session.load_session().await;
        self.session.initial_route().await
    }

    /// The shared signed-in user.
    #[must_use]
    pub fn session_cache(&self) -> Arc<SessionCache> {
        Arc::clone(&self.cache)
    }

    /// Signup, login and logout.
    #[must_use]
    pub fn session(&self) -> Arc<SessionManager> {
        Arc::clone(&self.session)
    }

    /// Current address lookup.
    #[must_use]
    pub fn location(&self) -> Arc<LocationResolver> {
        Arc::clone(&self.location)
    }

    /// Photo capture and selection.
    #[must_use]
    pub fn images(&self) -> Arc<ImageAcquisitionManager> {
        Arc::clone(&self.images)
    }
}

uniffi::setup_scaffolding!("snapspot_core");
