//! Router-level tests: JSON in, JSON out, against a seeded `MemoryStore`.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode, header},
  response::IntoResponse as _,
};
use roster_core::{
  RecordService,
  external::{Company, ExternalUser},
  store::ExternalDirectory,
};
use roster_store_memory::MemoryStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;

use crate::{ApiError, api_router};

#[derive(Debug, thiserror::Error)]
#[error("upstream unavailable")]
struct Unavailable;

/// Answers every request with the same upstream user, or fails every request.
struct CannedExternal {
  up: bool,
}

fn canned_user(id: &str) -> ExternalUser {
  ExternalUser {
    id:       id.into(),
    name:     "Leanne Graham".into(),
    username: "Bret".into(),
    email:    "Sincere@april.biz".into(),
    phone:    Some("1-770-736-8031 x56442".into()),
    website:  Some("hildegard.org".into()),
    address:  None,
    company:  Some(Company {
      name:         "Romaguera-Crona".into(),
      catch_phrase: None,
      bs:           None,
    }),
  }
}

impl ExternalDirectory for CannedExternal {
  type Error = Unavailable;

  async fn fetch_user(&self, id: &str) -> Result<ExternalUser, Unavailable> {
    if self.up { Ok(canned_user(id)) } else { Err(Unavailable) }
  }

  async fn fetch_users(&self) -> Result<Vec<ExternalUser>, Unavailable> {
    if self.up {
      Ok(vec![canned_user("1"), canned_user("2")])
    } else {
      Err(Unavailable)
    }
  }
}

fn app_with_upstream(up: bool) -> Router {
  api_router(RecordService::new(
    Arc::new(MemoryStore::seeded()),
    Arc::new(CannedExternal { up }),
  ))
}

fn app() -> Router { app_with_upstream(true) }

async fn call_raw(app: Router, op: &str, body: String) -> axum::response::Response {
  let req = Request::builder()
    .method("POST")
    .uri(format!("/{op}"))
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from(body))
    .unwrap();
  app.oneshot(req).await.unwrap()
}

async fn call(app: Router, op: &str, body: Value) -> (StatusCode, Value) {
  let resp = call_raw(app, op, body.to_string()).await;
  let status = resp.status();
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  let value = serde_json::from_slice(&bytes).unwrap();
  (status, value)
}

// ── LookupUserById ──────────────────────────────────────────────────────────

#[tokio::test]
async fn lookup_returns_one_result_per_key_in_order() {
  let (status, body) = call(
    app(),
    "LookupUserById",
    json!({ "keys": [{ "id": "1" }, { "id": "999" }, { "id": "2" }] }),
  )
  .await;
  assert_eq!(status, StatusCode::OK);

  let result = body["result"].as_array().unwrap();
  assert_eq!(result.len(), 3);
  assert_eq!(result[0]["id"], "1");
  assert_eq!(result[0]["name"], "Alice Johnson");
  assert_eq!(result[0]["role"], "USER_ROLE_ADMIN");
  assert_eq!(result[1]["id"], "999");
  assert_eq!(result[1]["name"], "");
  assert_eq!(result[1]["role"], "USER_ROLE_UNSPECIFIED");
  assert!(result[1]["age"].is_null());
  assert!(result[1]["profile"].is_null());
  assert_eq!(result[2]["name"], "Bob Smith");
}

// ── QueryUser / QueryUsers ──────────────────────────────────────────────────

#[tokio::test]
async fn query_user_unknown_is_null() {
  let (status, body) = call(app(), "QueryUser", json!({ "id": "999" })).await;
  assert_eq!(status, StatusCode::OK);
  assert!(body["user"].is_null());
}

#[tokio::test]
async fn query_user_serialises_nested_fields() {
  let (_, body) = call(app(), "QueryUser", json!({ "id": "1" })).await;
  let user = &body["user"];
  assert_eq!(user["skillCategories"][1], json!(["React", "Vue", "Angular"]));
  assert_eq!(user["profile"]["displayName"], "Alice J.");
  assert_eq!(user["profile"]["theme"], "THEME_DARK");
  assert_eq!(user["recentActivity"][0]["post"]["title"], "Getting Started with GraphQL");
  assert_eq!(user["recentActivity"][2]["comment"]["id"], "4");
  assert_eq!(user["age"], 28);
}

#[tokio::test]
async fn query_users_lists_all() {
  let (_, body) = call(app(), "QueryUsers", json!({})).await;
  assert_eq!(body["users"].as_array().unwrap().len(), 4);
}

// ── Mutations ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_user_email_only() {
  let app = app();
  let (_, before) = call(app.clone(), "QueryUser", json!({ "id": "2" })).await;

  let (status, body) = call(
    app,
    "MutationUpdateUser",
    json!({ "input": { "id": "2", "email": "robert@example.com" } }),
  )
  .await;
  assert_eq!(status, StatusCode::OK);

  let mut expected = before["user"].clone();
  expected["email"] = json!("robert@example.com");
  assert_eq!(body["updateUser"], expected);
}

#[tokio::test]
async fn update_user_unknown_is_null() {
  let (status, body) = call(
    app(),
    "MutationUpdateUser",
    json!({ "input": { "id": "999", "name": "Ghost" } }),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert!(body["updateUser"].is_null());
}

#[tokio::test]
async fn update_user_is_visible_to_later_queries() {
  let app = app();
  call(
    app.clone(),
    "MutationUpdateUser",
    json!({ "input": { "id": "3", "age": 0, "name": "" } }),
  )
  .await;

  let (_, body) = call(app, "QueryUser", json!({ "id": "3" })).await;
  assert_eq!(body["user"]["age"], 0);
  assert_eq!(body["user"]["name"], "Charlie Brown");
}

#[tokio::test]
async fn update_users_skips_unknown_ids() {
  let (status, body) = call(
    app(),
    "MutationUpdateUsers",
    json!({ "input": [
      { "id": "1", "name": "X" },
      { "id": "999", "name": "Y" }
    ] }),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  let updated = body["updateUsers"].as_array().unwrap();
  assert_eq!(updated.len(), 1);
  assert_eq!(updated[0]["id"], "1");
  assert_eq!(updated[0]["name"], "X");
}

// ── Activity and posts ──────────────────────────────────────────────────────

#[tokio::test]
async fn activity_limit_truncates_newest_first() {
  let (_, body) = call(
    app(),
    "QueryUserActivity",
    json!({ "userId": "1", "limit": 2 }),
  )
  .await;
  let items = body["userActivity"].as_array().unwrap();
  assert_eq!(items.len(), 2);
  assert_eq!(items[0]["post"]["id"], "1");
  assert_eq!(items[1]["post"]["id"], "2");
}

#[tokio::test]
async fn activity_for_unknown_user_is_empty() {
  let (status, body) = call(
    app(),
    "QueryUserActivity",
    json!({ "userId": "999", "limit": 5 }),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["userActivity"], json!([]));
}

#[tokio::test]
async fn create_post_for_unknown_author_is_404() {
  let (status, body) = call(
    app(),
    "MutationCreatePost",
    json!({ "input": { "title": "Orphan", "authorId": "999" } }),
  )
  .await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert!(body["error"].as_str().unwrap().contains("999"));
}

#[tokio::test]
async fn create_post_prepends_to_author_activity() {
  let app = app();
  let (status, body) = call(
    app.clone(),
    "MutationCreatePost",
    json!({ "input": { "title": "Federated Rust", "authorId": "1" } }),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(
    body["createPost"],
    json!({ "id": "5", "title": "Federated Rust", "authorId": "1" })
  );

  let (_, activity) = call(
    app.clone(),
    "QueryUserActivity",
    json!({ "userId": "1" }),
  )
  .await;
  let items = activity["userActivity"].as_array().unwrap();
  assert_eq!(items.len(), 4);
  assert_eq!(items[0]["post"], body["createPost"]);

  let (_, user) = call(app, "QueryUser", json!({ "id": "1" })).await;
  assert_eq!(user["user"]["recentActivity"], activity["userActivity"]);
}

// ── External users ──────────────────────────────────────────────────────────

#[tokio::test]
async fn external_user_is_passed_through() {
  let (status, body) = call(app(), "QueryExternalUser", json!({ "id": "1" })).await;
  assert_eq!(status, StatusCode::OK);
  let user = &body["externalUser"];
  assert_eq!(user["id"], "1");
  assert_eq!(user["username"], "Bret");
  assert_eq!(user["company"]["name"], "Romaguera-Crona");
  assert!(user["address"].is_null());
}

#[tokio::test]
async fn external_users_are_listed() {
  let (_, body) = call(app(), "QueryExternalUsers", json!({})).await;
  assert_eq!(body["externalUsers"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn upstream_failure_is_502() {
  let (status, body) = call(app_with_upstream(false), "QueryExternalUsers", json!({})).await;
  assert_eq!(status, StatusCode::BAD_GATEWAY);
  assert!(body["error"].as_str().unwrap().contains("upstream unavailable"));
}

// ── Transport ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn malformed_request_is_rejected() {
  let resp = call_raw(app(), "QueryUser", "{not json".to_string()).await;
  assert!(resp.status().is_client_error(), "status: {}", resp.status());
}

#[tokio::test]
async fn unknown_operation_is_404() {
  let resp = call_raw(app(), "DeleteUser", "{}".to_string()).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ── Error mapping ───────────────────────────────────────────────────────────

#[tokio::test]
async fn backend_failure_is_500() {
  let err = roster_core::Error::Store(Box::new(std::io::Error::other("disk gone")));
  let resp = ApiError::from(err).into_response();
  assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  let body: Value = serde_json::from_slice(&bytes).unwrap();
  assert_eq!(body["error"], "disk gone");
}
