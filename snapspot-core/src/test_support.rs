//! Scripted device fakes for unit tests.

use std::collections::VecDeque;
use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Mutex,
};

use tokio::sync::oneshot;

use crate::{
    config::{CaptureOptions, LocationAccuracy},
    device::{DeviceError, PermissionStatus},
    image::{ImageAsset, ImageProvider},
    location::{Coordinates, GeocodedAddress, LocationProvider},
    storage::{InMemoryKeyValueStore, KeyValueStore, StorageError, StorageResult},
};

pub struct ScriptedLocation {
    permission: Mutex<PermissionStatus>,
    permission_error: Option<DeviceError>,
    position: Result<Coordinates, DeviceError>,
    geocode: Result<Vec<GeocodedAddress>, DeviceError>,
    permission_requests: AtomicUsize,
    requested_accuracy: Mutex<Option<LocationAccuracy>>,
}

impl ScriptedLocation {
    pub fn granted(position: Coordinates, candidates: Vec<GeocodedAddress>) -> Self {
        Self {
            permission: Mutex::new(PermissionStatus::Granted),
            permission_error: None,
            position: Ok(position),
            geocode: Ok(candidates),
            permission_requests: AtomicUsize::new(0),
            requested_accuracy: Mutex::new(None),
        }
    }

    pub fn with_permission_error(mut self, error: DeviceError) -> Self {
        self.permission_error = Some(error);
        self
    }

    pub fn with_position_error(mut self, error: DeviceError) -> Self {
        self.position = Err(error);
        self
    }

    pub fn with_geocode_error(mut self, error: DeviceError) -> Self {
        self.geocode = Err(error);
        self
    }

    pub fn set_permission(&self, status: PermissionStatus) {
        *self.permission.lock().unwrap() = status;
    }

    pub fn permission_requests(&self) -> usize {
        self.permission_requests.load(Ordering::SeqCst)
    }

    pub fn requested_accuracy(&self) -> Option<LocationAccuracy> {
        *self.requested_accuracy.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl LocationProvider for ScriptedLocation {
    async fn request_foreground_permission(&self) -> Result<PermissionStatus, DeviceError> {
        self.permission_requests.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.permission_error {
            return Err(error.clone());
        }
        Ok(*self.permission.lock().unwrap())
    }

    async fn current_position(
        &self,
        accuracy: LocationAccuracy,
    ) -> Result<Coordinates, DeviceError> {
        *self.requested_accuracy.lock().unwrap() = Some(accuracy);
        self.position.clone()
    }

    async fn reverse_geocode(
        &self,
        _coordinates: Coordinates,
    ) -> Result<Vec<GeocodedAddress>, DeviceError> {
        self.geocode.clone()
    }
}

type Launch = Result<Option<ImageAsset>, DeviceError>;

pub struct ScriptedImages {
    camera_permission: Mutex<PermissionStatus>,
    library_permission: Mutex<PermissionStatus>,
    camera: Mutex<VecDeque<Launch>>,
    library: Mutex<VecDeque<Launch>>,
    last_options: Mutex<Option<CaptureOptions>>,
    camera_launches: AtomicUsize,
    library_launches: AtomicUsize,
}

impl ScriptedImages {
    pub fn granted() -> Self {
        Self {
            camera_permission: Mutex::new(PermissionStatus::Granted),
            library_permission: Mutex::new(PermissionStatus::Granted),
            camera: Mutex::new(VecDeque::new()),
            library: Mutex::new(VecDeque::new()),
            last_options: Mutex::new(None),
            camera_launches: AtomicUsize::new(0),
            library_launches: AtomicUsize::new(0),
        }
    }

    pub fn push_camera(&self, asset: Option<ImageAsset>) {
        self.camera.lock().unwrap().push_back(Ok(asset));
    }

    pub fn fail_camera(&self, error: DeviceError) {
        self.camera.lock().unwrap().push_back(Err(error));
    }

    pub fn push_library(&self, asset: Option<ImageAsset>) {
        self.library.lock().unwrap().push_back(Ok(asset));
    }

    pub fn set_camera_permission(&self, status: PermissionStatus) {
        *self.camera_permission.lock().unwrap() = status;
    }

    pub fn set_library_permission(&self, status: PermissionStatus) {
        *self.library_permission.lock().unwrap() = status;
    }

    pub fn last_options(&self) -> Option<CaptureOptions> {
        self.last_options.lock().unwrap().clone()
    }

    pub fn camera_launches(&self) -> usize {
        self.camera_launches.load(Ordering::SeqCst)
    }

    pub fn library_launches(&self) -> usize {
        self.library_launches.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ImageProvider for ScriptedImages {
    async fn request_camera_permission(&self) -> Result<PermissionStatus, DeviceError> {
        Ok(*self.camera_permission.lock().unwrap())
    }

    async fn request_media_library_permission(
        &self,
    ) -> Result<PermissionStatus, DeviceError> {
        Ok(*self.library_permission.lock().unwrap())
    }

    async fn launch_camera(&self, options: CaptureOptions) -> Launch {
        *self.last_options.lock().unwrap() = Some(options);
        self.camera_launches.fetch_add(1, Ordering::SeqCst);
        self.camera.lock().unwrap().pop_front().unwrap_or(Ok(None))
    }

    async fn launch_library(&self, options: CaptureOptions) -> Launch {
        *self.last_options.lock().unwrap() = Some(options);
        self.library_launches.fetch_add(1, Ordering::SeqCst);
        self.library.lock().unwrap().pop_front().unwrap_or(Ok(None))
    }
}

/// In-memory store whose reads and writes can be made to fail, or held
/// until the test releases them.
#[derive(Default)]
pub struct FlakyStore {
    inner: InMemoryKeyValueStore,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    hold_reads: AtomicBool,
    held: Mutex<VecDeque<oneshot::Sender<()>>>,
}

impl FlakyStore {
    /// Parks every later `get` until [`Self::release_read`] is called.
    pub fn hold_reads(&self) {
        self.hold_reads.store(true, Ordering::SeqCst);
    }

    pub fn held_reads(&self) -> usize {
        self.held.lock().unwrap().len()
    }

    /// Lets the oldest parked read continue.
    pub fn release_read(&self) {
        let next = self.held.lock().unwrap().pop_front();
        if let Some(release) = next {
            let _ = release.send(());
        }
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub async fn raw(&self, key: &str) -> Option<String> {
        self.inner.get(key.to_string()).await.unwrap()
    }

    pub async fn put_raw(&self, key: &str, value: &str) {
        self.inner
            .set(key.to_string(), value.to_string())
            .await
            .unwrap();
    }
}

#[async_trait::async_trait]
impl KeyValueStore for FlakyStore {
    async fn get(&self, key: String) -> StorageResult<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("read refused".to_string()));
        }
        if self.hold_reads.load(Ordering::SeqCst) {
            let (release, parked) = oneshot::channel();
            self.held.lock().unwrap().push_back(release);
            let _ = parked.await;
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: String, value: String) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("write refused".to_string()));
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: String) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("write refused".to_string()));
        }
        self.inner.remove(key).await
    }
}
