//! [`RecordService`]: the request/response contract over a directory and an
//! external user source.
//!
//! Only two situations are errors: creating a post for a missing author and a
//! failed external fetch. Every other miss is answered with an empty or
//! placeholder result so that batch calls never fail because of one key.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
  Error, Result,
  activity::ActivityItem,
  messages::{
    CreatePostRequest, CreatePostResponse, LookupUserByIdRequest,
    LookupUserByIdResponse, QueryExternalUserRequest, QueryExternalUserResponse,
    QueryExternalUsersRequest, QueryExternalUsersResponse, QueryUserActivityRequest,
    QueryUserActivityResponse, QueryUserRequest, QueryUserResponse, QueryUsersRequest,
    QueryUsersResponse, UpdateUserRequest, UpdateUserResponse, UpdateUsersRequest,
    UpdateUsersResponse,
  },
  store::{ExternalDirectory, UserDirectory},
  user::User,
};

/// The batch-oriented record service.
///
/// Cheap to clone: both collaborators are held behind `Arc`.
pub struct RecordService<D, X> {
  directory: Arc<D>,
  external:  Arc<X>,
}

impl<D, X> Clone for RecordService<D, X> {
  fn clone(&self) -> Self {
    Self {
      directory: Arc::clone(&self.directory),
      external:  Arc::clone(&self.external),
    }
  }
}

impl<D, X> RecordService<D, X>
where
  D: UserDirectory,
  X: ExternalDirectory,
{
  pub fn new(directory: Arc<D>, external: Arc<X>) -> Self {
    Self {
      directory,
      external,
    }
  }

  pub fn directory(&self) -> &Arc<D> { &self.directory }

  // ── Lookups ───────────────────────────────────────────────────────────

  /// Resolve a batch of keys positionally. Misses become placeholders.
  pub async fn lookup_user_by_id(
    &self,
    req: LookupUserByIdRequest,
  ) -> Result<LookupUserByIdResponse> {
    let mut result = Vec::with_capacity(req.keys.len());
    let mut misses = 0usize;

    for key in req.keys {
      match self.directory.get_user(&key.id).await.map_err(directory_error)? {
        Some(user) => result.push(user),
        None => {
          misses += 1;
          result.push(User::placeholder(key.id));
        }
      }
    }

    debug!(keys = result.len(), misses, "resolved user batch");
    Ok(LookupUserByIdResponse { result })
  }

  pub async fn query_user(&self, req: QueryUserRequest) -> Result<QueryUserResponse> {
    let user = self.directory.get_user(&req.id).await.map_err(directory_error)?;
    Ok(QueryUserResponse { user })
  }

  pub async fn query_users(&self, _req: QueryUsersRequest) -> Result<QueryUsersResponse> {
    let users = self.directory.list_users().await.map_err(directory_error)?;
    Ok(QueryUsersResponse { users })
  }

  // ── Mutations ─────────────────────────────────────────────────────────

  /// Apply one sparse patch. An unknown id yields an empty response.
  pub async fn update_user(&self, req: UpdateUserRequest) -> Result<UpdateUserResponse> {
    let update_user = self
      .directory
      .update_user(&req.input)
      .await
      .map_err(directory_error)?;
    if update_user.is_none() {
      debug!(user_id = %req.input.id, "update skipped: no such user");
    }
    Ok(UpdateUserResponse { update_user })
  }

  /// Apply patches in order, skipping empty and unknown ids.
  pub async fn update_users(&self, req: UpdateUsersRequest) -> Result<UpdateUsersResponse> {
    let mut update_users = Vec::with_capacity(req.input.len());

    for patch in &req.input {
      if patch.id.is_empty() {
        continue;
      }
      match self.directory.update_user(patch).await.map_err(directory_error)? {
        Some(user) => update_users.push(user),
        None => debug!(user_id = %patch.id, "update skipped: no such user"),
      }
    }

    Ok(UpdateUsersResponse { update_users })
  }

  /// Create a post. The only directory operation that reports a missing user
  /// as an error.
  pub async fn create_post(&self, req: CreatePostRequest) -> Result<CreatePostResponse> {
    let CreatePostRequest { input } = req;
    let create_post = self
      .directory
      .create_post(input.title, input.author_id)
      .await
      .map_err(directory_error)?;
    debug!(post_id = %create_post.id, author_id = %create_post.author_id, "created post");
    Ok(CreatePostResponse { create_post })
  }

  // ── Activity ──────────────────────────────────────────────────────────

  pub async fn query_user_activity(
    &self,
    req: QueryUserActivityRequest,
  ) -> Result<QueryUserActivityResponse> {
    let activity = self
      .directory
      .activity(&req.user_id)
      .await
      .map_err(directory_error)?
      .unwrap_or_default();

    Ok(QueryUserActivityResponse {
      user_activity: truncate_activity(activity, req.limit),
    })
  }

  // ── External users ────────────────────────────────────────────────────

  pub async fn query_external_user(
    &self,
    req: QueryExternalUserRequest,
  ) -> Result<QueryExternalUserResponse> {
    let external_user = self.external.fetch_user(&req.id).await.map_err(|e| {
      warn!(id = %req.id, error = %e, "failed to fetch external user");
      Error::ExternalFetch(e.to_string())
    })?;
    Ok(QueryExternalUserResponse { external_user })
  }

  pub async fn query_external_users(
    &self,
    _req: QueryExternalUsersRequest,
  ) -> Result<QueryExternalUsersResponse> {
    let external_users = self.external.fetch_users().await.map_err(|e| {
      warn!(error = %e, "failed to fetch external users");
      Error::ExternalFetch(e.to_string())
    })?;
    Ok(QueryExternalUsersResponse { external_users })
  }
}

fn directory_error<E: Into<Error>>(e: E) -> Error { e.into() }

/// Keep the first `limit` items. `None`, zero, negative, or oversized limits
/// keep everything.
pub fn truncate_activity(
  mut activity: Vec<ActivityItem>,
  limit: Option<i32>,
) -> Vec<ActivityItem> {
  if let Some(limit) = limit.and_then(|l| usize::try_from(l).ok())
    && limit > 0
  {
    activity.truncate(limit);
  }
  activity
}
