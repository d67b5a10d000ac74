//! In-memory backend for the Roster user directory.
//!
//! All state lives behind a single async mutex; every trait method takes the
//! lock once, so a read-merge-write never interleaves with another writer.
//! Nothing is persisted.

mod seed;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use seed::Seed;
pub use store::MemoryStore;
