//! Password hashing and verification — Argon2id.
//!
//! Passwords are stored as PHC-format strings (e.g.
//! `$argon2id$v=19$m=19456,t=2,p=1$...`) in the `password_hash` column of the
//! `users` table. Plain passwords exist only for the duration of a register
//! or login request.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{Error, Result};

/// Hash a password with a random salt and the default Argon2id parameters.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::PasswordHash(e.to_string()))
}

/// Verify a password against a stored PHC-format hash.
///
/// Returns `Ok(false)` on mismatch and `Err` only if the stored hash itself
/// is malformed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| Error::PasswordHash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
