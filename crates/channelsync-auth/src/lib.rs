//! # channelsync-auth
//!
//! User identity, credential checking, and channel authorization for the
//! Channelsync document-sync service.
//!
//! ## Modules
//!
//! - `password`: Argon2id credential hashing
//! - `user`: the `User` record, its validation rules, and the `UserUpdate` input payload
//! - `channels`: pure channel-authorization predicates and decisions
//! - `authenticator`: lookup/save/delete/authenticate through a document store

pub mod authenticator;
pub mod channels;
pub mod password;
pub mod user;

pub use authenticator::Authenticator;
pub use channels::{Actor, WILDCARD};
pub use password::PasswordHasher;
pub use user::{User, UserUpdate};
