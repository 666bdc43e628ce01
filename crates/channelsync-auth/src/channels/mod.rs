//! Channel authorization.
//!
//! Every decision is computed from the acting identity and the requested
//! channels; nothing is cached. The `can_see_*` family only answers yes or
//! no, while the `authorize_*` family turns a "no" into an error whose kind
//! depends on who asked (see [`unauthorized_error`]).

pub mod authorizer;

pub use authorizer::{forbidden_channels, unauthorized_error};

use crate::user::User;

/// Channel name (and entitlement) meaning "all channels".
pub const WILDCARD: &str = "*";

/// The identity a channel check is made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor<'a> {
    /// No identity resolved because access control is disabled. Every
    /// check passes.
    Unrestricted,
    /// A concrete user, possibly the anonymous guest.
    User(&'a User),
}

impl<'a> From<&'a User> for Actor<'a> {
    fn from(user: &'a User) -> Self {
        Actor::User(user)
    }
}

impl<'a> From<Option<&'a User>> for Actor<'a> {
    fn from(user: Option<&'a User>) -> Self {
        match user {
            Some(user) => Actor::User(user),
            None => Actor::Unrestricted,
        }
    }
}
