//! Process-wide view of the signed-in user.
//!
//! One [`SessionCache`] is created by the host and handed to every component
//! that needs the current identity. The session manager is its only writer.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, PoisonError, RwLock,
};

use tokio::sync::watch;

use super::state::User;

/// Receives every change of the signed-in user.
#[uniffi::export(with_foreign)]
pub trait SessionObserver: Send + Sync {
    /// Called after the cached user changed. `None` means signed out.
    fn on_user_changed(&self, user: Option<User>);
}

/// Shared holder of the signed-in user.
#[derive(uniffi::Object)]
pub struct SessionCache {
    current: watch::Sender<Option<User>>,
    restoring: AtomicBool,
    observers: RwLock<Vec<Arc<dyn SessionObserver>>>,
}

impl Default for SessionCache {
    fn default() -> Self {
        let (current, _) = watch::channel(None);
        Self {
            current,
            restoring: AtomicBool::new(true),
            observers: RwLock::new(Vec::new()),
        }
    }
}

#[uniffi::export]
impl SessionCache {
    /// Creates an empty cache in the restoring phase.
    #[uniffi::constructor]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.current.borrow().clone()
    }

    /// Returns `true` when a user is signed in.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.current.borrow().is_some()
    }

    /// Returns `true` until the launch-time restore has finished.
    #[must_use]
    pub fn is_restoring(&self) -> bool {
        self.restoring.load(Ordering::Acquire)
    }

    /// Registers `observer` for future changes.
    pub fn add_observer(&self, observer: Arc<dyn SessionObserver>) {
        self.observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(observer);
    }
}

impl SessionCache {
    /// Subscribes to changes from Rust. The receiver starts at the current value.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.current.subscribe()
    }

    pub(crate) fn set_user(&self, user: Option<User>) {
        let observers = self
            .observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        self.current.send_replace(user);
        for observer in observers {
            observer.on_user_changed(self.current.borrow().clone());
        }
    }

    pub(crate) fn finish_restore(&self) {
        self.restoring.store(false, Ordering::Release);
    }
}
