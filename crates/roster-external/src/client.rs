//! [`HttpExternalDirectory`]: a reqwest-backed [`ExternalDirectory`].

use std::time::Duration;

use reqwest::Client;
use roster_core::{external::ExternalUser, store::ExternalDirectory};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::{Error, Result, schema::UpstreamUser};

/// The public JSONPlaceholder API.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Upper bound on a whole upstream request, connect to last byte.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client for the external user source.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct HttpExternalDirectory {
  client:   Client,
  base_url: Url,
}

impl HttpExternalDirectory {
  pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
    let invalid = |reason: String| Error::InvalidBaseUrl {
      url: base_url.to_owned(),
      reason,
    };

    let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    if parsed.cannot_be_a_base() {
      return Err(invalid("not a hierarchical url".to_owned()));
    }

    let client = Client::builder().timeout(timeout).build()?;
    Ok(Self {
      client,
      base_url: parsed,
    })
  }

  /// Client for [`DEFAULT_BASE_URL`] with [`DEFAULT_TIMEOUT`].
  pub fn public() -> Result<Self> { Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT) }

  /// Append path segments to the base URL, percent-encoding each one.
  fn endpoint(&self, segments: &[&str]) -> Url {
    let mut url = self.base_url.clone();
    // `new` rejects cannot-be-a-base URLs, so this always succeeds.
    if let Ok(mut path) = url.path_segments_mut() {
      path.pop_if_empty().extend(segments);
    }
    url
  }

  async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
    let url = self.endpoint(segments);
    debug!(%url, "fetching external resource");

    let resp = self.client.get(url.clone()).send().await?;
    if !resp.status().is_success() {
      return Err(Error::Status {
        path:   url.path().to_owned(),
        status: resp.status(),
      });
    }

    let body = resp.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
  }
}

impl ExternalDirectory for HttpExternalDirectory {
  type Error = Error;

  /// `GET /users/{id}`
  async fn fetch_user(&self, id: &str) -> Result<ExternalUser> {
    let user: UpstreamUser = self.get_json(&["users", id]).await?;
    Ok(user.into())
  }

  /// `GET /users`
  async fn fetch_users(&self) -> Result<Vec<ExternalUser>> {
    let users: Vec<UpstreamUser> = self.get_json(&["users"]).await?;
    Ok(users.into_iter().map(ExternalUser::from).collect())
  }
}
