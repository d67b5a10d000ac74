use std::path::Path;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode, header},
};
use tower::ServiceExt as _;

use crate::{ServerConfig, router, service};

fn from_toml(src: &str) -> ServerConfig {
  config::Config::builder()
    .add_source(config::File::from_str(src, config::FileFormat::Toml))
    .build()
    .unwrap()
    .try_deserialize()
    .unwrap()
}

fn app(cfg: &ServerConfig) -> Router { router(service(cfg).unwrap()) }

async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
  let req = Request::builder()
    .method("POST")
    .uri(uri)
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from(body.to_owned()))
    .unwrap();
  let resp = app.oneshot(req).await.unwrap();
  let status = resp.status();
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  (status, serde_json::from_slice(&bytes).unwrap())
}

// ─── Configuration ────────────────────────────────────────────────────────────

#[test]
fn empty_config_uses_defaults() {
  let cfg = from_toml("");
  assert_eq!(cfg, ServerConfig::default());
  assert_eq!(cfg.address(), "127.0.0.1:3010");
  assert_eq!(cfg.external_timeout().as_secs(), 5);
  assert_eq!(cfg.external_base_url, "https://jsonplaceholder.typicode.com");
  assert!(cfg.seed);
}

#[test]
fn file_overrides_selected_keys() {
  let cfg = from_toml(
    r#"
      port = 8080
      seed = false
      external_timeout_secs = 2
    "#,
  );
  assert_eq!(cfg.address(), "127.0.0.1:8080");
  assert!(!cfg.seed);
  assert_eq!(cfg.external_timeout().as_secs(), 2);
  assert_eq!(cfg.external_base_url, roster_external::DEFAULT_BASE_URL);
}

#[test]
fn missing_config_file_is_not_an_error() {
  let cfg = ServerConfig::load(Path::new("/nonexistent/roster.toml")).unwrap();
  assert_eq!(cfg.host, ServerConfig::default().host);
}

#[test]
fn bad_external_url_fails_service_construction() {
  let cfg = ServerConfig {
    external_base_url: "not a url".into(),
    ..ServerConfig::default()
  };
  assert!(service(&cfg).is_err());
}

// ─── Router ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn health_answers_ok() {
  let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
  let resp = app(&ServerConfig::default()).oneshot(req).await.unwrap();
  assert_eq!(resp.status(), StatusCode::OK);
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn rpc_is_mounted_under_prefix() {
  let (status, body) = post_json(
    app(&ServerConfig::default()),
    "/rpc/QueryUser",
    r#"{"id":"1"}"#,
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["user"]["name"], "Alice Johnson");
}

#[tokio::test]
async fn unseeded_store_starts_empty() {
  let cfg = ServerConfig {
    seed: false,
    ..ServerConfig::default()
  };
  let (_, body) = post_json(app(&cfg), "/rpc/QueryUsers", "{}").await;
  assert_eq!(body["users"], serde_json::json!([]));
}
