//! Error type for `roster-store-memory`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The operation needs an existing user (post author, activity owner).
  #[error("user not found: {0}")]
  UserNotFound(String),
}

impl From<Error> for roster_core::Error {
  fn from(e: Error) -> Self {
    match e {
      Error::UserNotFound(id) => roster_core::Error::UserNotFound(id),
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
