//! Acquisition of the single photo being tagged.
//!
//! At most one image is selected at a time. Every successful capture, pick or
//! adoption replaces it outright.

mod provider;

pub use provider::{ImageAsset, ImageProvider};

use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use crate::{
    config::{CaptureOptions, SnapSpotConfig},
    device::{Capability, DeviceError},
    error::{ConfigError, ImageError},
};

const DEFAULT_MEDIA_TYPE: &str = "image";

/// The currently selected image.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct ImageSelection {
    /// Local URI of the image file.
    pub uri: String,
    /// Pixel width, 0 when unknown.
    pub width: u32,
    /// Pixel height, 0 when unknown.
    pub height: u32,
    /// Media type tag.
    pub media_type: String,
}

impl From<ImageAsset> for ImageSelection {
    fn from(asset: ImageAsset) -> Self {
        Self {
            uri: asset.uri,
            width: asset.width.unwrap_or(0),
            height: asset.height.unwrap_or(0),
            media_type: asset
                .media_type
                .filter(|tag| !tag.is_empty())
                .unwrap_or_else(|| DEFAULT_MEDIA_TYPE.to_string()),
        }
    }
}

/// Snapshot of the image picker state.
#[derive(Debug, Clone, Default, PartialEq, Eq, uniffi::Record)]
pub struct ImageState {
    /// Selected image, if any.
    pub selected: Option<ImageSelection>,
    /// `true` while a capture or pick is in flight.
    pub is_loading: bool,
    /// Last failure message.
    pub error: Option<String>,
}

/// Wraps the camera and photo library into "acquire one image".
#[derive(uniffi::Object)]
pub struct ImageAcquisitionManager {
    provider: Arc<dyn ImageProvider>,
    options: CaptureOptions,
    adopted_width: u32,
    adopted_height: u32,
    state: RwLock<ImageState>,
}

#[uniffi::export]
impl ImageAcquisitionManager {
    /// Creates a manager over the platform `provider`.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid.
    #[uniffi::constructor]
    pub fn new(
        provider: Arc<dyn ImageProvider>,
        config: SnapSpotConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            provider,
            options: config.capture,
            adopted_width: config.adopted_photo_width,
            adopted_height: config.adopted_photo_height,
            state: RwLock::new(ImageState::default()),
        })
    }

    /// Takes a photo with the camera.
    ///
    /// Returns `Ok(None)` if the user cancels; the previous selection is kept.
    ///
    /// # Errors
    ///
    /// [`ImageError::PermissionDenied`] if camera access is refused,
    /// [`ImageError::DeviceUnavailable`] if the camera fails.
    pub async fn capture_from_camera(&self) -> Result<Option<ImageSelection>, ImageError> {
        self.acquire(Source::Camera).await
    }

    /// Picks a photo from the library.
    ///
    /// Returns `Ok(None)` if the user cancels; the previous selection is kept.
    ///
    /// # Errors
    ///
    /// [`ImageError::PermissionDenied`] if library access is refused,
    /// [`ImageError::DeviceUnavailable`] if the picker fails.
    pub async fn pick_from_library(&self) -> Result<Option<ImageSelection>, ImageError> {
        self.acquire(Source::Library).await
    }

    /// Selects a photo taken by an in-app viewfinder, which reports only a URI.
    ///
    /// The configured default dimensions are recorded. An empty URI changes nothing.
    pub fn adopt_captured_photo(&self, uri: String) -> Option<ImageSelection> {
        if uri.is_empty() {
            return None;
        }
        let selection = ImageSelection {
            uri,
            width: self.adopted_width,
            height: self.adopted_height,
            media_type: DEFAULT_MEDIA_TYPE.to_string(),
        };
        *self.write_state() = ImageState {
            selected: Some(selection.clone()),
            is_loading: false,
            error: None,
        };
        Some(selection)
    }

    /// Drops the selected image along with any error or loading flag.
    pub fn clear_selection(&self) {
        *self.write_state() = ImageState::default();
    }

    /// Clears the last error message.
    pub fn clear_error(&self) {
        self.write_state().error = None;
    }

    /// Returns the selected image, if any.
    #[must_use]
    pub fn selected_image(&self) -> Option<ImageSelection> {
        self.state().selected
    }

    /// Returns a snapshot of the picker state.
    #[must_use]
    pub fn state(&self) -> ImageState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[derive(Debug, Clone, Copy)]
enum Source {
    Camera,
    Library,
}

impl Source {
    const fn capability(self) -> Capability {
        match self {
            Self::Camera => Capability::Camera,
            Self::Library => Capability::PhotoLibrary,
        }
    }
}

impl ImageAcquisitionManager {
    async fn acquire(&self, source: Source) -> Result<Option<ImageSelection>, ImageError> {
        {
            let mut state = self.write_state();
            state.is_loading = true;
            state.error = None;
        }

        let capability = source.capability();
        let result = self
            .launch(source)
            .await
            .map(|asset| asset.map(ImageSelection::from));

        {
            let mut state = self.write_state();
            state.is_loading = false;
            match &result {
                Ok(Some(selection)) => {
                    state.selected = Some(selection.clone());
                    state.error = None;
                }
                Ok(None) => {}
                Err(err) => state.error = Some(err.to_string()),
            }
        }

        match &result {
            Ok(Some(_)) => log::debug!("{capability} returned an image"),
            Ok(None) => log::debug!("{capability} cancelled by user"),
            Err(err) => log::warn!("{capability} acquisition failed: {err:?}"),
        }
        result
    }

    async fn launch(&self, source: Source) -> Result<Option<ImageAsset>, ImageError> {
        let capability = source.capability();
        let unavailable = |err: DeviceError| ImageError::DeviceUnavailable {
            capability,
            reason: err.to_string(),
        };

        let status = match source {
            Source::Camera => self.provider.request_camera_permission().await,
            Source::Library => self.provider.request_media_library_permission().await,
        }
        .map_err(unavailable)?;
        if !status.is_granted() {
            return Err(ImageError::PermissionDenied { capability });
        }

        let options = self.options.clone();
        let launched = match source {
            Source::Camera => self.provider.launch_camera(options).await,
            Source::Library => self.provider.launch_library(options).await,
        };
        launched.map_err(unavailable)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, ImageState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
