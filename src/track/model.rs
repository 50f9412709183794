use std::time::Duration;

use chrono::{DateTime, Utc};

/// A single play record as reported by the player.
///
/// Equality is value-based: two plays of the same song at the same
/// timestamp compare equal, which is what cache removal matches on.
/// Timestamps carry whole-second resolution, the same as the on-disk
/// format.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Track {
    pub artist: Option<String>,
    pub title: String,
    pub album: Option<String>,
    pub duration: Duration,
    pub timestamp: Option<DateTime<Utc>>,
}

impl Track {
    /// Whether this is the empty sentinel (a default-constructed track
    /// carrying no data at all).
    pub fn is_empty(&self) -> bool {
        self.artist.is_none()
            && self.title.is_empty()
            && self.album.is_none()
            && self.duration.is_zero()
            && self.timestamp.is_none()
    }
}
