use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Settings;
use crate::error::DataDirError;
use crate::paths;
use crate::track::Track;

use super::observer::{CacheObserver, LogObserver};
use super::persist;
use super::validate;

/// Per-user queue of scrobbles awaiting submission, mirrored to disk.
///
/// Construction eagerly loads any existing state from
/// `<runtime-data dir>/<username>_subs_cache.xml`; every mutation rewrites
/// that file synchronously before returning, and an emptied cache deletes
/// it. The design assumes a single process owns a given username's file;
/// there is no cross-process locking.
pub struct ScrobbleCache {
    inner: CacheInner,
    observer: Arc<dyn CacheObserver>,
}

/// The cache state proper, kept private to this module. Cloning it deep-
/// copies username, path and track list.
#[derive(Clone)]
struct CacheInner {
    username: String,
    path: PathBuf,
    product: String,
    tracks: Vec<Track>,
}

impl ScrobbleCache {
    /// Opens the cache for `username`, reporting diagnostics through
    /// `tracing`.
    ///
    /// A missing or unreadable cache file is not an error: the cache
    /// starts empty and the condition is logged. The only failure here is
    /// not being able to resolve or create the runtime-data directory.
    ///
    /// # Panics
    ///
    /// Panics if `username` is empty; that is a caller bug, not a runtime
    /// condition.
    pub fn new(username: &str, settings: &Settings) -> Result<Self, DataDirError> {
        Self::with_observer(username, settings, Arc::new(LogObserver))
    }

    /// Same as [`ScrobbleCache::new`], with a caller-supplied diagnostics
    /// sink.
    pub fn with_observer(
        username: &str,
        settings: &Settings,
        observer: Arc<dyn CacheObserver>,
    ) -> Result<Self, DataDirError> {
        assert!(!username.is_empty(), "scrobble cache needs a username");

        let dir = paths::runtime_data_dir(settings.storage.data_dir.as_deref())?;
        let path = dir.join(format!("{username}_subs_cache.xml"));

        let tracks = match persist::load(&path) {
            Ok(tracks) => tracks,
            Err(err) => {
                observer.load_failed(&path, &err);
                Vec::new()
            }
        };

        Ok(ScrobbleCache {
            inner: CacheInner {
                username: username.to_string(),
                path,
                product: settings.client.product.clone(),
                tracks,
            },
            observer,
        })
    }

    /// Validates each candidate in order and appends the survivors, then
    /// rewrites the file once for the whole batch.
    ///
    /// Rejected candidates are reported per item through the observer;
    /// the operation itself cannot fail.
    pub fn add(&mut self, candidates: &[Track]) {
        for track in candidates {
            if let Some(why) = validate::check(track) {
                self.observer.track_rejected(track, why);
            } else if track.is_empty() {
                self.observer.empty_track_skipped(track);
            } else {
                self.inner.tracks.push(track.clone());
            }
        }
        self.save();
    }

    /// Drops every cached track that is value-equal to any of `targets`
    /// (each stored track is dropped at most once), then rewrites the file
    /// once.
    ///
    /// Returns the number of tracks *remaining* in the cache, not the
    /// number removed. Callers depend on this documented quirk; do not
    /// "fix" it.
    pub fn remove(&mut self, targets: &[Track]) -> usize {
        self.inner.tracks.retain(|track| !targets.contains(track));
        self.save();
        self.inner.tracks.len()
    }

    /// The current in-memory queue, in insertion order. No disk access.
    pub fn tracks(&self) -> &[Track] {
        &self.inner.tracks
    }

    /// Location of the persisted cache file for this user.
    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    pub fn username(&self) -> &str {
        &self.inner.username
    }

    /// Best-effort full rewrite. A failed save keeps the in-memory state;
    /// the observer hears about it and the next save catches up.
    fn save(&self) {
        if let Err(err) = persist::save(&self.inner.path, &self.inner.product, &self.inner.tracks) {
            self.observer.save_failed(&self.inner.path, &err);
        }
    }
}

impl Clone for ScrobbleCache {
    /// Value copy: username, path and track list are duplicated
    /// independently of the source. The observer handle is shared, being
    /// a sink rather than cache state.
    fn clone(&self) -> Self {
        ScrobbleCache {
            inner: self.inner.clone(),
            observer: Arc::clone(&self.observer),
        }
    }
}
