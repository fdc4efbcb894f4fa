use crate::{
    config::CaptureOptions,
    device::{DeviceError, PermissionStatus},
};

/// An image handed back by the camera or photo library picker.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct ImageAsset {
    /// Local URI of the image file.
    pub uri: String,
    /// Pixel width, when the platform reports it.
    pub width: Option<u32>,
    /// Pixel height, when the platform reports it.
    pub height: Option<u32>,
    /// Media type tag, when the platform reports it.
    pub media_type: Option<String>,
}

/// Camera and photo library services of the host platform.
///
/// Launch methods return `Ok(None)` when the user backs out of the picker.
#[uniffi::export(with_foreign)]
#[async_trait::async_trait]
pub trait ImageProvider: Send + Sync {
    /// Prompts for camera access.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt itself fails.
    async fn request_camera_permission(&self) -> Result<PermissionStatus, DeviceError>;

    /// Prompts for photo library access.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt itself fails.
    async fn request_media_library_permission(
        &self,
    ) -> Result<PermissionStatus, DeviceError>;

    /// Opens the camera capture UI.
    ///
    /// # Errors
    ///
    /// Returns an error if the camera fails.
    async fn launch_camera(
        &self,
        options: CaptureOptions,
    ) -> Result<Option<ImageAsset>, DeviceError>;

    /// Opens the photo library picker.
    ///
    /// # Errors
    ///
    /// Returns an error if the picker fails.
    async fn launch_library(
        &self,
        options: CaptureOptions,
    ) -> Result<Option<ImageAsset>, DeviceError>;
}
