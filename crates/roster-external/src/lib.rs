//! Fetcher for the third-party "external users" REST source.
//!
//! Talks to a JSONPlaceholder-compatible API (`GET /users`,
//! `GET /users/{id}`) and translates its payload into
//! [`roster_core::external::ExternalUser`].

mod client;
mod schema;

pub mod error;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, HttpExternalDirectory};
pub use error::{Error, Result};
pub use schema::UpstreamUser;
