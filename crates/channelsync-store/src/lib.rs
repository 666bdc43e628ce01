//! # channelsync-store
//!
//! Document store implementations for Channelsync identity records:
//!
//! - **memory**: In-process store backed by [dashmap](https://crates.io/crates/dashmap)
//! - **redis**: Redis-backed store using the [redis](https://crates.io/crates/redis) crate
//!
//! The provider is selected at runtime based on configuration.

pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;

#[cfg(feature = "memory")]
pub use memory::MemoryDocumentStore;
pub use provider::StoreManager;
