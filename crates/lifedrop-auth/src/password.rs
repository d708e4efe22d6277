//! Argon2id hashing for the stored registration credential.
//!
//! Credential verification is out of scope here — identity is authenticated
//! upstream. The hash exists so the raw credential never reaches storage.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString};
use argon2::Argon2;

use lifedrop_core::error::AppError;

/// Hashes and verifies registration credentials with Argon2id defaults.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Creates a new hasher.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext credential.
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))
    }

    /// Verify a plaintext credential against a stored hash.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Stored hash is malformed: {e}")))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("secret123").unwrap();
        assert!(hasher.verify("secret123", &hash).unwrap());
        assert!(!hasher.verify("wrong", &hash).unwrap());
    }
}
