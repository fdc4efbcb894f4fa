use crate::storage::StoredUser;

/// The signed-in account as seen by screens. Carries no credential material.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct User {
    /// Opaque identifier generated at signup.
    pub id: String,
    /// Display name.
    pub full_name: String,
    /// Account email.
    pub email: String,
    /// Unix seconds at signup.
    pub created_at: u64,
}

impl From<&StoredUser> for User {
    fn from(stored: &StoredUser) -> Self {
        Self {
            id: stored.id.clone(),
            full_name: stored.full_name.clone(),
            email: stored.email.clone(),
            created_at: stored.created_at,
        }
    }
}

/// Snapshot of the auth form state.
#[derive(Debug, Clone, Default, PartialEq, Eq, uniffi::Record)]
pub struct SessionState {
    /// Signed-in user, if any.
    pub user: Option<User>,
    /// `true` only while a login or signup is in flight.
    pub is_loading: bool,
    /// Last failure message, cleared on the next attempt or explicitly.
    pub error: Option<String>,
}

/// Where the app should land on launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum LaunchRoute {
    /// An account exists on this device.
    Dashboard,
    /// Nothing stored yet, or storage could not be read.
    Login,
}
