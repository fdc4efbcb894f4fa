//! Argon2id hashing for the stored credential.
//!
//! New hashes use the configured cost; verification reads the parameters back
//! out of the PHC string, so changing the cost never locks out an existing account.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use secrecy::{ExposeSecret, SecretString};

use crate::{config::PasswordHashing, error::AuthError};

pub fn hash_password(
    password: &SecretString,
    cost: PasswordHashing,
) -> Result<String, AuthError> {
    let params = Params::new(cost.memory_kib, cost.iterations, cost.parallelism, None)
        .map_err(|err| AuthError::Hashing(err.to_string()))?;
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password(password.expose_secret().as_bytes(), &salt)
        .map_err(|err| AuthError::Hashing(err.to_string()))?;
    Ok(hash.to_string())
}

/// `Ok(false)` on mismatch. A hash that does not parse means the stored
/// record is damaged.
pub fn verify_password(
    password: &SecretString,
    hash: &str,
) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|err| AuthError::CorruptedRecord(format!("password hash: {err}")))?;
    Ok(Argon2::default()
        .verify_password(password.expose_secret().as_bytes(), &parsed)
        .is_ok())
}
