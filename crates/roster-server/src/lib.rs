//! Process wiring for the Roster service.
//!
//! Loads [`ServerConfig`], builds the store, the external client, and the
//! [`RecordService`] on top of them, and mounts the RPC router under `/rpc`.

use std::{path::Path, sync::Arc, time::Duration};

use axum::{Router, routing::get};
use config::ConfigError;
use roster_core::RecordService;
use roster_external::HttpExternalDirectory;
use roster_store_memory::MemoryStore;
use serde::Deserialize;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `roster.toml` and
/// `ROSTER_*` environment variables. Every key is optional.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
  pub host:                  String,
  pub port:                  u16,
  pub external_base_url:     String,
  pub external_timeout_secs: u64,
  /// Load the demo users, posts, and comments at startup.
  pub seed:                  bool,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:                  "127.0.0.1".into(),
      port:                  3010,
      external_base_url:     roster_external::DEFAULT_BASE_URL.into(),
      external_timeout_secs: roster_external::DEFAULT_TIMEOUT.as_secs(),
      seed:                  true,
    }
  }
}

impl ServerConfig {
  /// Layer the optional file at `path` under the environment.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("ROSTER"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  pub fn external_timeout(&self) -> Duration {
    Duration::from_secs(self.external_timeout_secs)
  }
}

// ─── Application ──────────────────────────────────────────────────────────────

/// The concrete service the binary runs.
pub type Service = RecordService<MemoryStore, HttpExternalDirectory>;

/// Build the record service described by `cfg`.
pub fn service(cfg: &ServerConfig) -> roster_external::Result<Service> {
  let store = if cfg.seed {
    MemoryStore::seeded()
  } else {
    MemoryStore::new()
  };
  let external =
    HttpExternalDirectory::new(&cfg.external_base_url, cfg.external_timeout())?;

  info!(
    seeded = cfg.seed,
    external = %cfg.external_base_url,
    "record service ready"
  );
  Ok(RecordService::new(Arc::new(store), Arc::new(external)))
}

/// `GET /health` plus the RPC surface under `/rpc`, with request tracing.
pub fn router(service: Service) -> Router {
  Router::new()
    .route("/health", get(|| async { "ok" }))
    .nest("/rpc", roster_api::api_router(service))
    .layer(
      TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}

#[cfg(test)]
mod tests;
