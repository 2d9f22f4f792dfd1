//! Password hashing with Argon2id.
//!
//! Registration stores a salted Argon2id hash; login verifies a supplied
//! password against it. Parameters follow the OWASP recommendation for
//! online services and can be lowered for tests via [`PasswordHasher::with_params`].

use crate::error::AuthError;
use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

/// Password hasher with a tunable work factor.
///
/// Defaults to the OWASP-recommended Argon2id parameters:
/// 19 MiB of memory, 2 iterations, parallelism 1.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher {
    /// Create a password hasher with the recommended parameters.
    #[must_use]
    pub fn new() -> Self {
        // m=19456 KiB, t=2, p=1. Constants validated by the argon2 crate;
        // failure here would be a library bug, not a runtime condition.
        let params = Params::new(19456, 2, 1, None)
            .expect("recommended Argon2 parameters are valid constants");

        Self { params }
    }

    /// Create a password hasher with a custom work factor.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::HashingFailed` if the parameters are out of
    /// the ranges the algorithm accepts.
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, AuthError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| AuthError::HashingFailed(format!("Invalid parameters: {e}")))?;

        Ok(Self { params })
    }

    /// Hash a plaintext password with a freshly generated random salt.
    ///
    /// Returns a PHC-formatted hash string suitable for storage.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::HashingFailed` if hashing fails.
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashingFailed(format!("Hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verify a plaintext password against a stored PHC hash.
    ///
    /// Returns `Ok(true)` on a match, `Ok(false)` on a mismatch.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidHashFormat` if the stored hash cannot
    /// be parsed.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidHashFormat)?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());

        match argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(_) => Ok(false), // Other errors also treated as non-match
        }
    }
}

/// Hash a password with the default work factor.
///
/// # Errors
///
/// Returns `AuthError::HashingFailed` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    PasswordHasher::new().hash(password)
}

/// Verify a password against a stored hash with the default work factor.
///
/// # Errors
///
/// Returns `AuthError::InvalidHashFormat` if the hash cannot be parsed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    PasswordHasher::new().verify(password, hash)
}
