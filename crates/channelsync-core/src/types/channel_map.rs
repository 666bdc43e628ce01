//! A document's per-channel membership history.
//!
//! Owned by the document-sync layer; the authorization engine only reads it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Marker recording that a document left a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRemoval {
    /// Sequence number at which the document was removed.
    #[serde(default)]
    pub seq: u64,
    /// Revision ID that removed it.
    #[serde(default)]
    pub rev: String,
}

impl ChannelRemoval {
    /// Create a removal marker.
    pub fn new(seq: u64, rev: impl Into<String>) -> Self {
        Self {
            seq,
            rev: rev.into(),
        }
    }

    /// An empty marker carries no removal information.
    pub fn is_empty(&self) -> bool {
        self.seq == 0 && self.rev.is_empty()
    }
}

/// Map from channel name to an optional removal marker.
///
/// `None` (JSON `null`) or an empty marker means the document is currently
/// in that channel. A non-empty marker means it was removed earlier.
pub type ChannelMap = HashMap<String, Option<ChannelRemoval>>;

/// Returns true if `channels` records current membership in `channel`.
pub fn is_current_member(channels: &ChannelMap, channel: &str) -> bool {
    match channels.get(channel) {
        Some(None) => true,
        Some(Some(removal)) => removal.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_markers() {
        let map: ChannelMap = serde_json::from_str(
            r#"{"x": null, "y": {"seq": 12, "rev": "3-abc"}, "z": {}}"#,
        )
        .unwrap();
        assert!(is_current_member(&map, "x"));
        assert!(!is_current_member(&map, "y"));
        assert!(is_current_member(&map, "z"));
        assert!(!is_current_member(&map, "missing"));
    }

    #[test]
    fn test_removal_is_empty() {
        assert!(ChannelRemoval::default().is_empty());
        assert!(!ChannelRemoval::new(5, "").is_empty());
        assert!(!ChannelRemoval::new(0, "1-a").is_empty());
    }
}
