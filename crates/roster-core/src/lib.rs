//! Core types and trait definitions for the Roster user directory.
//!
//! This crate has no HTTP or storage dependencies. The
//! in-memory backend, the external REST fetcher, and the JSON API all depend
//! on it; it depends on nothing of theirs.

// Implementations use `async fn`; the traits spell out the `Send` bounds.
#![allow(async_fn_in_trait)]

pub mod activity;
pub mod error;
pub mod external;
pub mod messages;
pub mod patch;
pub mod service;
pub mod store;
pub mod user;

pub use error::{Error, Result};
pub use service::RecordService;
