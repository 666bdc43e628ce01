//! The persisted user record and its credential rules.

use serde::{Deserialize, Serialize};
use tracing::warn;

use channelsync_core::error::AppError;
use channelsync_core::traits::credential_hasher::CredentialHasher;

use crate::channels::WILDCARD;

/// Persistent information about a user.
///
/// The name `""` is the anonymous (guest) identity. It never has a
/// credential; every named user must have one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user name.
    #[serde(default)]
    pub name: String,
    /// Opaque hashed password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,
    /// Channels the user may access, in stored order. `"*"` grants all.
    #[serde(default)]
    pub channels: Vec<String>,
}

impl User {
    /// Creates and validates a user, hashing `password` into its credential.
    ///
    /// An empty password leaves the user without a credential, which is only
    /// valid for the anonymous user.
    pub fn new(
        name: impl Into<String>,
        password: &str,
        channels: Vec<String>,
        hasher: &dyn CredentialHasher,
    ) -> Result<Self, AppError> {
        let mut user = Self {
            name: name.into(),
            credential: None,
            channels,
        };
        user.set_password(password, hasher)?;
        user.validate()?;
        Ok(user)
    }

    /// The default guest used while no record for `""` has been saved.
    pub fn default_guest() -> Self {
        Self {
            name: String::new(),
            credential: None,
            channels: vec![WILDCARD.to_string()],
        }
    }

    /// Returns true for the anonymous identity.
    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }

    /// Checks whether this user contains valid data.
    pub fn validate(&self) -> Result<(), AppError> {
        if !is_valid_username(&self.name) {
            return Err(AppError::validation(format!(
                "Invalid username {:?}",
                self.name
            )));
        }
        if self.is_anonymous() != self.credential.is_none() {
            return Err(AppError::validation("Invalid password"));
        }
        Ok(())
    }

    /// Changes the credential to a hash of `password`, or clears it when
    /// `password` is empty. Does not validate.
    pub fn set_password(
        &mut self,
        password: &str,
        hasher: &dyn CredentialHasher,
    ) -> Result<(), AppError> {
        self.credential = if password.is_empty() {
            None
        } else {
            Some(hasher.hash(password)?)
        };
        Ok(())
    }

    /// Returns true if `password` is correct for this user.
    pub fn authenticate(&self, password: &str, hasher: &dyn CredentialHasher) -> bool {
        match &self.credential {
            None => password.is_empty(),
            Some(credential) => match hasher.verify(credential, password) {
                Ok(matched) => matched,
                Err(e) => {
                    warn!(user = %self.name, error = %e, "Stored credential could not be verified");
                    false
                }
            },
        }
    }

    /// Returns true if `channel` is listed verbatim in the user's channels.
    pub fn has_channel(&self, channel: &str) -> bool {
        self.channels.iter().any(|c| c == channel)
    }

    /// Returns true if the user holds the wildcard entitlement.
    pub fn has_wildcard(&self) -> bool {
        self.has_channel(WILDCARD)
    }
}

/// Empty, or one or more ASCII letters, digits, or underscores.
fn is_valid_username(name: &str) -> bool {
    name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::PasswordHasher;
    use channelsync_core::error::ErrorKind;

    fn hasher() -> PasswordHasher {
        PasswordHasher::with_params(8, 1, 1).unwrap()
    }

    fn channels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_new_then_authenticate() {
        let hasher = hasher();
        for (name, password) in [("alice", "s3cret"), ("bob_2", "x"), ("U", "pass word")] {
            let user = User::new(name, password, channels(&["a"]), &hasher).unwrap();
            assert!(user.authenticate(password, &hasher));
            assert!(!user.authenticate(&format!("{password}x"), &hasher));
            assert!(!user.authenticate("", &hasher));
        }
    }

    #[test]
    fn test_anonymous_user() {
        let hasher = hasher();
        let user = User::new("", "", channels(&["public"]), &hasher).unwrap();
        assert!(user.is_anonymous());
        assert!(user.credential.is_none());
        assert!(user.authenticate("", &hasher));
        assert!(!user.authenticate("anything", &hasher));
    }

    #[test]
    fn test_validate_username() {
        let hasher = hasher();
        let err = User::new("bad name", "pw", vec![], &hasher).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "Invalid username \"bad name\"");

        assert!(User::new("bob_2", "pw", vec![], &hasher).is_ok());
        assert!(User::new("émile", "pw", vec![], &hasher).is_err());
        assert!(User::new("a-b", "pw", vec![], &hasher).is_err());
    }

    #[test]
    fn test_named_user_requires_password() {
        let err = User::new("carol", "", vec![], &hasher()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "Invalid password");
    }

    #[test]
    fn test_anonymous_user_rejects_password() {
        let err = User::new("", "pw", vec![], &hasher()).unwrap_err();
        assert_eq!(err.message, "Invalid password");
    }

    #[test]
    fn test_set_password_clears_and_replaces() {
        let hasher = hasher();
        let mut user = User::new("dave", "old", vec![], &hasher).unwrap();
        user.set_password("new", &hasher).unwrap();
        assert!(user.authenticate("new", &hasher));
        assert!(!user.authenticate("old", &hasher));

        user.set_password("", &hasher).unwrap();
        assert!(user.credential.is_none());
        assert!(user.validate().is_err());
    }

    #[test]
    fn test_corrupt_credential_fails_closed() {
        let user = User {
            name: "eve".to_string(),
            credential: Some("garbage".to_string()),
            channels: vec![],
        };
        assert!(!user.authenticate("garbage", &hasher()));
    }

    #[test]
    fn test_default_guest() {
        let guest = User::default_guest();
        assert!(guest.is_anonymous());
        assert!(guest.credential.is_none());
        assert_eq!(guest.channels, vec!["*".to_string()]);
        assert!(guest.validate().is_ok());
    }

    #[test]
    fn test_serialized_shape() {
        let guest = User::default_guest();
        let json = serde_json::to_value(&guest).unwrap();
        assert_eq!(json, serde_json::json!({"name": "", "channels": ["*"]}));

        let named = User {
            name: "frank".to_string(),
            credential: Some("$argon2id$opaque".to_string()),
            channels: vec![],
        };
        let json = serde_json::to_value(&named).unwrap();
        assert_eq!(json["credential"], "$argon2id$opaque");
        assert_eq!(json["channels"], serde_json::json!([]));
    }

    #[test]
    fn test_deserialize_ignores_password_field() {
        let user: User =
            serde_json::from_str(r#"{"name": "gina", "password": "plain", "channels": ["a"]}"#)
                .unwrap();
        assert_eq!(user.name, "gina");
        assert!(user.credential.is_none());
        assert_eq!(user.channels, vec!["a".to_string()]);
    }
}
