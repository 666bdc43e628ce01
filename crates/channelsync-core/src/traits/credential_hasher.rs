//! One-way credential hashing port.

use crate::result::AppResult;

/// Turns plaintext passwords into opaque credentials and checks them.
///
/// The algorithm is an implementation detail of the adapter; callers only
/// ever store and compare the opaque string.
pub trait CredentialHasher: Send + Sync + std::fmt::Debug + 'static {
    /// Hash a plaintext password into an opaque credential.
    fn hash(&self, plaintext: &str) -> AppResult<String>;

    /// Check a plaintext password against a stored credential.
    ///
    /// Returns `Ok(false)` on mismatch; `Err` only when the credential
    /// itself is unusable.
    fn verify(&self, credential: &str, plaintext: &str) -> AppResult<bool>;
}
