use std::path::Path;

use tracing::{debug, warn};

use crate::error::PersistError;
use crate::track::Track;

use super::validate::Invalidity;

/// Sink for the cache's per-item diagnostics.
///
/// None of these calls affect the cache's behavior; they exist so callers
/// can observe rejected candidates and persistence trouble without the
/// cache depending on any particular logging setup.
pub trait CacheObserver: Send + Sync {
    /// A candidate failed validation and was not cached.
    fn track_rejected(&self, track: &Track, why: Invalidity);

    /// A candidate was the empty sentinel and was not cached.
    fn empty_track_skipped(&self, track: &Track);

    /// The cache file could not be read at construction; the cache starts
    /// empty.
    fn load_failed(&self, path: &Path, err: &PersistError);

    /// The cache file could not be rewritten after a mutation; the
    /// in-memory state is kept and the next successful save catches up.
    fn save_failed(&self, path: &Path, err: &PersistError);
}

/// Default observer: forwards diagnostics to `tracing`.
pub struct LogObserver;

impl CacheObserver for LogObserver {
    fn track_rejected(&self, track: &Track, why: Invalidity) {
        debug!("rejected scrobble candidate {:?}: {why}", track.title);
    }

    fn empty_track_skipped(&self, _track: &Track) {
        debug!("will not cache an empty track");
    }

    fn load_failed(&self, path: &Path, err: &PersistError) {
        warn!(
            "could not read scrobble cache at {}, starting empty: {err}",
            path.display()
        );
    }

    fn save_failed(&self, path: &Path, err: &PersistError) {
        warn!("could not write scrobble cache at {}: {err}", path.display());
    }
}
