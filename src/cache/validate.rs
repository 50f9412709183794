//! Pre-acceptance validation of scrobble candidates.
//!
//! Each candidate is checked against a fixed rule chain; the first failing
//! rule wins and becomes the reported reason. The rules only weed out
//! obviously bad data: exact spam windows are the submission service's
//! call, not ours.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Months, Utc};

use crate::track::Track;

/// Shortest play the submission service accepts as a scrobble.
pub const MIN_SCROBBLE_LENGTH: Duration = Duration::from_secs(31);

/// 2003-01-01T00:00:00Z, when the scrobbling service came online. Nothing
/// can have been played before that.
const SERVICE_INCEPTION_UNIX: i64 = 1_041_379_200;

/// Artist names players substitute when the real one is unknown.
const PLACEHOLDER_ARTISTS: [&str; 4] =
    ["unknown artist", "unknown", "[unknown]", "[unknown artist]"];

/// Why a candidate track was refused by the cache.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Invalidity {
    TooShort,
    NoTimestamp,
    FromTheFuture,
    FromTheDistantPast,
    ArtistNameMissing,
    TrackNameMissing,
    ArtistInvalid,
}

impl fmt::Display for Invalidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Invalidity::TooShort => "track is too short to scrobble",
            Invalidity::NoTimestamp => "track has no timestamp",
            Invalidity::FromTheFuture => "timestamp is more than a month in the future",
            Invalidity::FromTheDistantPast => "timestamp predates the scrobbling service",
            Invalidity::ArtistNameMissing => "artist name is missing",
            Invalidity::TrackNameMissing => "track name is missing",
            Invalidity::ArtistInvalid => "artist name is a placeholder",
        };
        f.write_str(text)
    }
}

/// Checks a candidate against the current wall clock. Returns the first
/// rule it breaks, or `None` when the track is fit to cache.
pub fn check(track: &Track) -> Option<Invalidity> {
    check_at(track, Utc::now())
}

fn check_at(track: &Track, now: DateTime<Utc>) -> Option<Invalidity> {
    if track.duration < MIN_SCROBBLE_LENGTH {
        return Some(Invalidity::TooShort);
    }

    let Some(timestamp) = track.timestamp else {
        return Some(Invalidity::NoTimestamp);
    };

    let future_cutoff = now
        .checked_add_months(Months::new(1))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);
    if timestamp > future_cutoff {
        return Some(Invalidity::FromTheFuture);
    }
    if timestamp.timestamp() < SERVICE_INCEPTION_UNIX {
        return Some(Invalidity::FromTheDistantPast);
    }

    let Some(artist) = track.artist.as_deref() else {
        return Some(Invalidity::ArtistNameMissing);
    };
    if track.title.is_empty() {
        return Some(Invalidity::TrackNameMissing);
    }
    if PLACEHOLDER_ARTISTS.contains(&artist.to_lowercase().as_str()) {
        return Some(Invalidity::ArtistInvalid);
    }

    None
}
