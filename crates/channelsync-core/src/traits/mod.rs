//! Core traits defined in `channelsync-core` and implemented by other crates.

pub mod credential_hasher;
pub mod document_store;

pub use credential_hasher::CredentialHasher;
pub use document_store::DocumentStore;
