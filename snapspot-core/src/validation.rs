//! Form field checks for the signup and login screens.
//!
//! Each function returns the message to show under the field, or `None` when
//! the value is acceptable.

use std::sync::LazyLock;

use regex::Regex;

const MIN_PASSWORD_LEN: usize = 6;
const MIN_FULL_NAME_LEN: usize = 2;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// Checks that `email` is present and shaped like an address.
#[uniffi::export]
#[must_use]
pub fn validate_email(email: &str) -> Option<String> {
    if email.trim().is_empty() {
        return Some("Email is required".to_string());
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Some("Please enter a valid email address".to_string());
    }
    None
}

/// Checks that `password` is present and long enough.
///
/// Length is counted in Unicode scalar values, so an emoji counts once.
#[uniffi::export]
#[must_use]
pub fn validate_password(password: &str) -> Option<String> {
    if password.is_empty() {
        return Some("Password is required".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Some(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        ));
    }
    None
}

/// Checks that `full_name` has at least two non-blank characters.
#[uniffi::export]
#[must_use]
pub fn validate_full_name(full_name: &str) -> Option<String> {
    let trimmed = full_name.trim();
    if trimmed.is_empty() {
        return Some("Full name is required".to_string());
    }
    if trimmed.chars().count() < MIN_FULL_NAME_LEN {
        return Some(format!(
            "Full name must be at least {MIN_FULL_NAME_LEN} characters long"
        ));
    }
    None
}

/// Checks that the confirmation repeats `password`.
#[uniffi::export]
#[must_use]
pub fn validate_confirm_password(password: &str, confirm_password: &str) -> Option<String> {
    if confirm_password.is_empty() {
        return Some("Please confirm your password".to_string());
    }
    if password != confirm_password {
        return Some("Passwords do not match".to_string());
    }
    None
}
