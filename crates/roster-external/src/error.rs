//! Error type for `roster-external`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid base url {url:?}: {reason}")]
  InvalidBaseUrl { url: String, reason: String },

  #[error("request failed: {0}")]
  Http(#[from] reqwest::Error),

  #[error("GET {path} returned {status}")]
  Status {
    path:   String,
    status: reqwest::StatusCode,
  },

  #[error("malformed response body: {0}")]
  Decode(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
