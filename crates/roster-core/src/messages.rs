//! Request and response messages for the record service.
//!
//! One pair per operation. Field names are camelCase and enums use their
//! protobuf names. List-valued fields are plain JSON arrays rather than the
//! `ListOf*` wrapper messages of the router's generated schema.

use serde::{Deserialize, Serialize};

use crate::{
  activity::{ActivityItem, Post},
  external::ExternalUser,
  patch::UserPatch,
  user::User,
};

// ─── LookupUserById ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupUserByIdKey {
  pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupUserByIdRequest {
  #[serde(default)]
  pub keys: Vec<LookupUserByIdKey>,
}

impl LookupUserByIdRequest {
  pub fn from_ids<I, S>(ids: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      keys: ids
        .into_iter()
        .map(|id| LookupUserByIdKey { id: id.into() })
        .collect(),
    }
  }
}

/// `result[i]` always answers `keys[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupUserByIdResponse {
  pub result: Vec<User>,
}

// ─── QueryUser / QueryUsers ──────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryUserRequest {
  #[serde(default)]
  pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryUserResponse {
  pub user: Option<User>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryUsersRequest {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryUsersResponse {
  pub users: Vec<User>,
}

// ─── Updates ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
  pub input: UserPatch,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserResponse {
  pub update_user: Option<User>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUsersRequest {
  #[serde(default)]
  pub input: Vec<UserPatch>,
}

/// Only users that were found are listed, in patch order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUsersResponse {
  pub update_users: Vec<User>,
}

// ─── Activity ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryUserActivityRequest {
  #[serde(default)]
  pub user_id: String,
  /// `None` or `0` means no limit.
  pub limit:   Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryUserActivityResponse {
  pub user_activity: Vec<ActivityItem>,
}

// ─── Posts ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostInput {
  pub title:     String,
  pub author_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostRequest {
  pub input: CreatePostInput,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostResponse {
  pub create_post: Post,
}

// ─── External users ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryExternalUserRequest {
  pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryExternalUserResponse {
  pub external_user: ExternalUser,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryExternalUsersRequest {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryExternalUsersResponse {
  pub external_users: Vec<ExternalUser>,
}
