//! Record key builders for every document the identity core writes.

/// Prefix for user record keys.
const USER_PREFIX: &str = "user:";

/// Store key for the user record named `username`.
///
/// The guest identity (`""`) maps to the bare prefix.
pub fn user_doc_id(username: &str) -> String {
    format!("{USER_PREFIX}{username}")
}
