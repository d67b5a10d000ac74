//! Error types for `roster-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A user that must exist for the operation (e.g. a post author) is absent.
  #[error("user not found: {0}")]
  UserNotFound(String),

  /// The third-party user source failed or returned an unreadable body.
  #[error("external fetch failed: {0}")]
  ExternalFetch(String),

  /// Backend failure unrelated to the request, for directories that can fail
  /// (I/O, a remote store). The in-memory store never returns it.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
