//! The scrobble cache: validation, ordered in-memory storage and
//! synchronous XML persistence, one file per username.

mod observer;
mod persist;
mod store;
mod validate;

pub use observer::{CacheObserver, LogObserver};
pub use store::ScrobbleCache;
pub use validate::{Invalidity, MIN_SCROBBLE_LENGTH};
