//! Password hashing with Argon2id, stored as PHC strings.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
};

use super::ProviderError;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    fn hash_password(&self, password: &str) -> Result<String, ProviderError>;

    /// `Ok(false)` on mismatch, `Err` only when the stored hash is malformed
    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, ProviderError>;
}

#[derive(Default)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash_password(&self, password: &str) -> Result<String, ProviderError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| ProviderError::PasswordHash(e.to_string()))
    }

    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, ProviderError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| ProviderError::PasswordHash(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}
