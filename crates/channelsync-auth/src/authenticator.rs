//! Identity store façade: loads, saves, deletes, and authenticates users
//! through a [`DocumentStore`].

use std::sync::Arc;

use bytes::Bytes;
use tracing::debug;

use channelsync_core::error::AppError;
use channelsync_core::traits::credential_hasher::CredentialHasher;
use channelsync_core::traits::document_store::DocumentStore;
use channelsync_store::keys::user_doc_id;

use crate::user::{User, UserUpdate};

/// Manages user records for one database.
///
/// Saves are blind overwrites; concurrent saves of the same name resolve
/// as last-writer-wins in the store.
#[derive(Debug, Clone)]
pub struct Authenticator {
    /// Backing document store.
    store: Arc<dyn DocumentStore>,
    /// Credential hashing primitive.
    hasher: Arc<dyn CredentialHasher>,
}

impl Authenticator {
    /// Creates an authenticator over `store`, hashing with `hasher`.
    pub fn new(store: Arc<dyn DocumentStore>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { store, hasher }
    }

    /// The hasher used for credentials.
    pub fn hasher(&self) -> &dyn CredentialHasher {
        self.hasher.as_ref()
    }

    /// Looks up a user.
    ///
    /// A stored record whose name differs from `name` is rejected as an
    /// internal error.
    ///
    /// If no record exists for `""`, returns the default guest, which can see
    /// every channel. Saving a record for `""` replaces that default.
    pub async fn get_user(&self, name: &str) -> Result<User, AppError> {
        let key = user_doc_id(name);
        match self.store.get(&key).await? {
            Some(raw) => {
                let user: User = serde_json::from_slice(&raw)?;
                if user.name != name {
                    return Err(AppError::internal(format!(
                        "Record for user {name:?} holds name {:?}",
                        user.name
                    )));
                }
                debug!(user = %name, "Loaded user record");
                Ok(user)
            }
            None if name.is_empty() => {
                debug!("No guest record saved, using default guest");
                Ok(User::default_guest())
            }
            None => Err(AppError::not_found(format!("User {name:?} not found"))),
        }
    }

    /// Saves a user, applying any pending password first.
    ///
    /// The record is validated before the store is touched; on failure
    /// nothing is written. Returns the record as persisted.
    pub async fn save_user(&self, update: impl Into<UserUpdate>) -> Result<User, AppError> {
        let UserUpdate { mut user, password } = update.into();
        if let Some(password) = password {
            user.set_password(&password, self.hasher.as_ref())?;
        }
        user.validate()?;

        let raw = serde_json::to_vec(&user)?;
        self.store.set(&user_doc_id(&user.name), Bytes::from(raw)).await?;
        debug!(user = %user.name, channels = ?user.channels, "Saved user record");
        Ok(user)
    }

    /// Deletes a user record.
    pub async fn delete_user(&self, name: &str) -> Result<(), AppError> {
        self.store.delete(&user_doc_id(name)).await?;
        debug!(user = %name, "Deleted user record");
        Ok(())
    }

    /// Authenticates a user by name and password.
    ///
    /// Unknown users, store failures, and wrong passwords all yield `None`.
    /// An empty name and password return the guest.
    pub async fn authenticate_user(&self, name: &str, password: &str) -> Option<User> {
        let user = match self.get_user(name).await {
            Ok(user) => user,
            Err(e) => {
                debug!(user = %name, error = %e, "Authentication lookup failed");
                return None;
            }
        };
        if !user.authenticate(password, self.hasher.as_ref()) {
            debug!(user = %name, "Authentication rejected");
            return None;
        }
        Some(user)
    }
}
