//! Channel authorization predicates and decisions.

use tracing::debug;

use channelsync_core::error::AppError;
use channelsync_core::types::channel_map::{ChannelMap, is_current_member};

use super::{Actor, WILDCARD};
use crate::user::User;

/// Generic denial message used when the offending channels are not named.
const NOT_ALLOWED: &str = "You are not allowed to see this";

impl Actor<'_> {
    /// Returns true if the actor may access `channel`.
    pub fn can_see_channel(self, channel: &str) -> bool {
        match self {
            Actor::Unrestricted => true,
            Actor::User(user) => {
                channel == WILDCARD || user.has_channel(channel) || user.has_wildcard()
            }
        }
    }

    /// Returns true if the actor may access every one of `channels`.
    ///
    /// An empty list is always allowed.
    pub fn can_see_all_channels<S: AsRef<str>>(self, channels: &[S]) -> bool {
        channels.iter().all(|c| self.can_see_channel(c.as_ref()))
    }

    /// Fails with an error naming every channel in `channels` the actor may
    /// not access.
    pub fn authorize_all_channels<S: AsRef<str>>(self, channels: &[S]) -> Result<(), AppError> {
        let forbidden = forbidden_channels(self, channels);
        match self {
            Actor::User(user) if !forbidden.is_empty() => {
                debug!(user = %user.name, ?forbidden, "Channel access denied");
                Err(unauthorized_error(
                    user,
                    format!("You are not allowed to see channels {forbidden:?}"),
                ))
            }
            _ => Ok(()),
        }
    }

    /// Fails unless the actor may access a channel the document is currently in.
    ///
    /// Walks the user's channels in stored order: the wildcard grants access,
    /// as does any channel the document currently belongs to. Channels the
    /// document was removed from do not count. A user with no channels is
    /// always denied.
    pub fn authorize_any_doc_channels(self, doc_channels: &ChannelMap) -> Result<(), AppError> {
        let user = match self {
            Actor::Unrestricted => return Ok(()),
            Actor::User(user) => user,
        };

        for channel in &user.channels {
            if channel == WILDCARD || is_current_member(doc_channels, channel) {
                return Ok(());
            }
        }

        debug!(user = %user.name, "Document channel access denied");
        Err(unauthorized_error(user, NOT_ALLOWED))
    }
}

impl User {
    /// Returns true if the user may access `channel`.
    pub fn can_see_channel(&self, channel: &str) -> bool {
        Actor::User(self).can_see_channel(channel)
    }

    /// Returns true if the user may access every one of `channels`.
    pub fn can_see_all_channels<S: AsRef<str>>(&self, channels: &[S]) -> bool {
        Actor::User(self).can_see_all_channels(channels)
    }

    /// Returns true if the user may access at least one of `channels`.
    ///
    /// When nothing matches, including when `channels` is empty, a user
    /// holding the wildcard is still allowed.
    ///
    /// Takes a concrete user: callers running with access control disabled
    /// must decide that case before asking.
    pub fn can_see_any_channels<S: AsRef<str>>(&self, channels: &[S]) -> bool {
        if channels.iter().any(|c| self.can_see_channel(c.as_ref())) {
            return true;
        }
        self.has_wildcard()
    }

    /// Fails with a generic error unless [`User::can_see_any_channels`] holds.
    pub fn authorize_any_channels<S: AsRef<str>>(&self, channels: &[S]) -> Result<(), AppError> {
        if self.can_see_any_channels(channels) {
            Ok(())
        } else {
            debug!(user = %self.name, "Channel access denied");
            Err(unauthorized_error(self, NOT_ALLOWED))
        }
    }

    /// See [`Actor::authorize_all_channels`].
    pub fn authorize_all_channels<S: AsRef<str>>(&self, channels: &[S]) -> Result<(), AppError> {
        Actor::User(self).authorize_all_channels(channels)
    }

    /// See [`Actor::authorize_any_doc_channels`].
    pub fn authorize_any_doc_channels(&self, doc_channels: &ChannelMap) -> Result<(), AppError> {
        Actor::User(self).authorize_any_doc_channels(doc_channels)
    }
}

/// Channels from `channels` the actor may not access, in input order.
pub fn forbidden_channels<S: AsRef<str>>(actor: Actor<'_>, channels: &[S]) -> Vec<String> {
    channels
        .iter()
        .map(AsRef::as_ref)
        .filter(|c| !actor.can_see_channel(c))
        .map(str::to_string)
        .collect()
}

/// Error for a failed check.
///
/// The anonymous user is asked to log in; anyone else is forbidden with
/// `message`.
pub fn unauthorized_error(user: &User, message: impl Into<String>) -> AppError {
    if user.is_anonymous() {
        AppError::unauthorized("login required")
    } else {
        AppError::forbidden(message)
    }
}
