//! Argon2id password hashing and verification.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use channelsync_core::config::auth::AuthConfig;
use channelsync_core::error::AppError;
use channelsync_core::traits::credential_hasher::CredentialHasher;

/// Handles password hashing and verification using Argon2id.
///
/// Credentials are PHC strings, so verification uses the parameters
/// embedded in each stored hash rather than the configured ones.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    /// Cost parameters for newly hashed passwords.
    params: Params,
}

impl PasswordHasher {
    /// Creates a hasher with the Argon2 library defaults.
    pub fn new() -> Self {
        Self {
            params: Params::default(),
        }
    }

    /// Creates a hasher with explicit cost parameters.
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, AppError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| AppError::configuration(format!("Invalid Argon2 parameters: {e}")))?;
        Ok(Self { params })
    }

    /// Creates a hasher from auth configuration.
    pub fn from_config(config: &AuthConfig) -> Result<Self, AppError> {
        Self::with_params(
            config.argon2_memory_kib,
            config.argon2_iterations,
            config.argon2_parallelism,
        )
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hashes a plaintext password using Argon2id with a random salt.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored Argon2id hash.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        match self.argon2().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialHasher for PasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<String, AppError> {
        self.hash_password(plaintext)
    }

    fn verify(&self, credential: &str, plaintext: &str) -> Result<bool, AppError> {
        self.verify_password(plaintext, credential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use channelsync_core::error::ErrorKind;

    fn fast_hasher() -> PasswordHasher {
        PasswordHasher::with_params(8, 1, 1).unwrap()
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = fast_hasher();
        let hash = hasher.hash_password("letmein").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify_password("letmein", &hash).unwrap());
        assert!(!hasher.verify_password("letmeinx", &hash).unwrap());
    }

    #[test]
    fn test_salted_hashes_differ() {
        let hasher = fast_hasher();
        let a = hasher.hash("same").unwrap();
        let b = hasher.hash("same").unwrap();
        assert_ne!(a, b);
        assert!(hasher.verify(&a, "same").unwrap());
        assert!(hasher.verify(&b, "same").unwrap());
    }

    #[test]
    fn test_malformed_hash_is_error() {
        let err = fast_hasher().verify("not-a-phc-string", "pw").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Internal);
    }

    #[test]
    fn test_invalid_params_rejected() {
        let err = PasswordHasher::with_params(0, 0, 0).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn test_from_default_config() {
        let hasher = PasswordHasher::from_config(&AuthConfig::default()).unwrap();
        let hash = hasher.hash("pw").unwrap();
        assert!(fast_hasher().verify(&hash, "pw").unwrap());
    }
}
