//! Core type definitions used across the Channelsync workspace.

pub mod channel_map;

pub use channel_map::{ChannelMap, ChannelRemoval, is_current_member};
