//! Local single-account signup, login and session restore.
//!
//! There is no server: the "account" is one record in the platform key-value
//! store and the "session" is the in-memory copy of it. Logging out clears the
//! session only, so the same credentials keep working afterwards.
//!
//! Overlapping calls are not serialized. If `login` is invoked twice, both run
//! and whichever finishes last determines the final state.

mod cache;
mod password;
mod state;

pub use cache::{SessionCache, SessionObserver};
pub use state::{LaunchRoute, SessionState, User};

use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};
use std::time::{SystemTime, UNIX_EPOCH};

use secrecy::SecretString;

use crate::{
    config::{PasswordHashing, SnapSpotConfig},
    error::{AuthError, ConfigError},
    storage::{CredentialRecordStore, KeyValueStore, StoredUser},
};

/// Orchestrates signup, login and logout against the stored credential record.
#[derive(uniffi::Object)]
pub struct SessionManager {
    records: CredentialRecordStore,
    cache: Arc<SessionCache>,
    hashing: PasswordHashing,
    state: RwLock<SessionState>,
}

#[uniffi::export]
impl SessionManager {
    /// Creates a manager persisting into `store` and publishing into `cache`.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid.
    #[uniffi::constructor]
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        cache: Arc<SessionCache>,
        config: SnapSpotConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            records: CredentialRecordStore::new(store, config.record_key),
            cache,
            hashing: config.password_hashing,
            state: RwLock::new(SessionState::default()),
        })
    }

    /// Creates the device account and signs it in.
    ///
    /// Any earlier account with a different email is replaced.
    ///
    /// # Errors
    ///
    /// [`AuthError::DuplicateAccount`] if the stored account has this email;
    /// otherwise storage or hashing failures.
    pub async fn signup(
        &self,
        full_name: String,
        email: String,
        password: String,
    ) -> Result<User, AuthError> {
        self.begin();
        let result = self
            .create_account(full_name, email, SecretString::from(password))
            .await;
        self.finish(result)
    }

    /// Signs in with the stored account.
    ///
    /// # Errors
    ///
    /// [`AuthError::NoAccount`], [`AuthError::InvalidEmail`] or
    /// [`AuthError::InvalidPassword`] on a mismatch; storage failures otherwise.
    /// The previously signed-in user is kept on failure.
    pub async fn login(&self, email: String, password: String) -> Result<User, AuthError> {
        self.begin();
        let result = self
            .check_credentials(&email, &SecretString::from(password))
            .await;
        self.finish(result)
    }

    /// Signs out. The stored account is kept so it can sign in again.
    pub fn logout(&self) {
        *self.write_state() = SessionState::default();
        self.cache.set_user(None);
        log::info!("session cleared");
    }

    /// Restores the session from storage at launch. A missing or unreadable
    /// record leaves the app signed out.
    pub async fn load_session(&self) {
        match self.records.load().await {
            Ok(Some(stored)) => {
                let user = User::from(&stored);
                self.write_state().user = Some(user.clone());
                self.cache.set_user(Some(user));
                log::debug!("session restored");
            }
            Ok(None) => log::debug!("no stored account, starting signed out"),
            Err(err) => log::error!("failed to restore session: {err}"),
        }
        self.cache.finish_restore();
    }

    /// Clears the last error message.
    pub fn clear_error(&self) {
        self.write_state().error = None;
    }

    /// Returns a snapshot of the session state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.state().user
    }

    /// Picks the first screen: the dashboard when a readable account is
    /// stored, the login screen otherwise.
    pub async fn initial_route(&self) -> LaunchRoute {
        match self.records.load().await {
            Ok(Some(_)) => LaunchRoute::Dashboard,
            Ok(None) => LaunchRoute::Login,
            Err(err) => {
                log::error!("failed to read stored account: {err}");
                LaunchRoute::Login
            }
        }
    }

    /// Deletes the stored account and signs out.
    ///
    /// This is also the way out of a [`AuthError::CorruptedRecord`].
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot remove the record.
    pub async fn delete_account(&self) -> Result<(), AuthError> {
        if let Err(err) = self.records.clear().await {
            let err = AuthError::from(err);
            self.write_state().error = Some(err.to_string());
            return Err(err);
        }
        self.logout();
        log::info!("stored account deleted");
        Ok(())
    }
}

impl SessionManager {
    async fn create_account(
        &self,
        full_name: String,
        email: String,
        password: SecretString,
    ) -> Result<StoredUser, AuthError> {
        if let Some(existing) = self.records.load().await? {
            if existing.email == email {
                return Err(AuthError::DuplicateAccount);
            }
        }

        let stored = StoredUser {
            id: uuid::Uuid::new_v4().to_string(),
            full_name,
            email,
            password_hash: password::hash_password(&password, self.hashing)?,
            created_at: unix_now(),
        };
        self.records.save(&stored).await?;
        Ok(stored)
    }

    async fn check_credentials(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<StoredUser, AuthError> {
        let stored = self.records.load().await?.ok_or(AuthError::NoAccount)?;
        if stored.email != email {
            return Err(AuthError::InvalidEmail);
        }
        if !password::verify_password(password, &stored.password_hash)? {
            return Err(AuthError::InvalidPassword);
        }
        Ok(stored)
    }

    fn begin(&self) {
        let mut state = self.write_state();
        state.is_loading = true;
        state.error = None;
    }

    fn finish(&self, result: Result<StoredUser, AuthError>) -> Result<User, AuthError> {
        match result {
            Ok(stored) => {
                let user = User::from(&stored);
                {
                    let mut state = self.write_state();
                    state.user = Some(user.clone());
                    state.is_loading = false;
                    state.error = None;
                }
                self.cache.set_user(Some(user.clone()));
                log::info!("signed in as {}", user.id);
                Ok(user)
            }
            Err(err) => {
                {
                    let mut state = self.write_state();
                    state.is_loading = false;
                    state.error = Some(err.to_string());
                }
                log::warn!("authentication failed: {err}");
                Err(err)
            }
        }
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}
