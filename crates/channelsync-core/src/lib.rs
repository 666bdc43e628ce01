//! # channelsync-core
//!
//! Core crate for Channelsync. Contains the store and hashing ports,
//! configuration schemas, the document channel-map types, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other Channelsync crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
