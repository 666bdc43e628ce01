//! Input payload for creating or updating a user.

use std::fmt;

use serde::Deserialize;

use super::model::User;

/// A user record plus an optional plaintext password to apply on save.
///
/// Only deserializable: the plaintext is consumed by
/// [`Authenticator::save_user`](crate::Authenticator::save_user) and can
/// never be serialized back out.
#[derive(Clone, Deserialize)]
pub struct UserUpdate {
    /// The record to persist.
    #[serde(flatten)]
    pub user: User,
    /// Plaintext password; an empty string clears the credential.
    #[serde(default)]
    pub password: Option<String>,
}

impl UserUpdate {
    /// Wraps a record without changing its credential.
    pub fn new(user: User) -> Self {
        Self {
            user,
            password: None,
        }
    }

    /// Wraps a record and sets a new password on save.
    pub fn with_password(user: User, password: impl Into<String>) -> Self {
        Self {
            user,
            password: Some(password.into()),
        }
    }
}

impl From<User> for UserUpdate {
    fn from(user: User) -> Self {
        Self::new(user)
    }
}

impl fmt::Debug for UserUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserUpdate")
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload_with_password() {
        let update: UserUpdate = serde_json::from_str(
            r#"{"name": "hank", "password": "hunter2", "channels": ["x", "y"]}"#,
        )
        .unwrap();
        assert_eq!(update.user.name, "hank");
        assert_eq!(update.user.channels, vec!["x".to_string(), "y".to_string()]);
        assert!(update.user.credential.is_none());
        assert_eq!(update.password.as_deref(), Some("hunter2"));
    }

    #[test]
    fn test_parse_payload_without_password() {
        let update: UserUpdate = serde_json::from_str(r#"{"name": "", "channels": ["chan1"]}"#)
            .unwrap();
        assert!(update.password.is_none());
        assert!(update.user.is_anonymous());
    }

    #[test]
    fn test_debug_redacts_password() {
        let update = UserUpdate::with_password(User::default_guest(), "hunter2");
        let printed = format!("{update:?}");
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("<redacted>"));
    }
}
