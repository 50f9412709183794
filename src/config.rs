//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema consumed by the cache
//! (client identity and storage location) and helpers to load it from
//! disk and environment.

mod load;
mod schema;

pub use schema::*;
