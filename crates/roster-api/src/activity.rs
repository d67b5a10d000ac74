//! Handlers for activity queries and post creation.
//!
//! | Path | Request | Response |
//! |------|---------|----------|
//! | `POST /QueryUserActivity` | `{"userId":..,"limit":n?}` | `{"userActivity":[..]}` |
//! | `POST /MutationCreatePost` | `{"input":{"title":..,"authorId":..}}` | `{"createPost":..}`, 404 if the author is unknown |

use axum::{Json, extract::State};
use roster_core::{
  RecordService,
  messages::{
    CreatePostRequest, CreatePostResponse, QueryUserActivityRequest,
    QueryUserActivityResponse,
  },
  store::{ExternalDirectory, UserDirectory},
};
use tracing::info;

use crate::error::ApiError;

/// `POST /QueryUserActivity`
pub async fn query_user_activity<D, X>(
  State(service): State<RecordService<D, X>>,
  Json(req): Json<QueryUserActivityRequest>,
) -> Result<Json<QueryUserActivityResponse>, ApiError>
where
  D: UserDirectory,
  X: ExternalDirectory,
{
  Ok(Json(service.query_user_activity(req).await?))
}

/// `POST /MutationCreatePost`
pub async fn create_post<D, X>(
  State(service): State<RecordService<D, X>>,
  Json(req): Json<CreatePostRequest>,
) -> Result<Json<CreatePostResponse>, ApiError>
where
  D: UserDirectory,
  X: ExternalDirectory,
{
  let resp = service.create_post(req).await?;
  info!(post_id = %resp.create_post.id, author_id = %resp.create_post.author_id, "post created");
  Ok(Json(resp))
}
