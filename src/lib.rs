//! Per-user offline cache of scrobbles awaiting submission.
//!
//! Playback events can happen while the submission service is unreachable;
//! this crate validates them, keeps them in insertion order and mirrors
//! them synchronously to one XML file per username. Once the client has
//! submitted a batch it removes the tracks again; an emptied cache deletes
//! its file.
//!
//! The entry point is [`ScrobbleCache`]; [`Settings`] injects the client
//! identity and storage location, and [`CacheObserver`] lets callers watch
//! per-item diagnostics without the cache depending on a logging setup.

mod cache;
mod config;
mod error;
mod paths;
mod track;

pub use cache::{CacheObserver, Invalidity, LogObserver, MIN_SCROBBLE_LENGTH, ScrobbleCache};
pub use config::*;
pub use error::{DataDirError, PersistError};
pub use paths::{DATA_PATH_ENV, runtime_data_dir};
pub use track::Track;
