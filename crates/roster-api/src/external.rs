//! Handlers for the external user pass-through.
//!
//! Upstream failures surface as `502 Bad Gateway`; nothing is retried.

use axum::{Json, extract::State};
use roster_core::{
  RecordService,
  messages::{
    QueryExternalUserRequest, QueryExternalUserResponse, QueryExternalUsersRequest,
    QueryExternalUsersResponse,
  },
  store::{ExternalDirectory, UserDirectory},
};

use crate::error::ApiError;

/// `POST /QueryExternalUser`, body `{"id":"1"}`
pub async fn query_external_user<D, X>(
  State(service): State<RecordService<D, X>>,
  Json(req): Json<QueryExternalUserRequest>,
) -> Result<Json<QueryExternalUserResponse>, ApiError>
where
  D: UserDirectory,
  X: ExternalDirectory,
{
  Ok(Json(service.query_external_user(req).await?))
}

/// `POST /QueryExternalUsers`, body `{}`
pub async fn query_external_users<D, X>(
  State(service): State<RecordService<D, X>>,
  Json(req): Json<QueryExternalUsersRequest>,
) -> Result<Json<QueryExternalUsersResponse>, ApiError>
where
  D: UserDirectory,
  X: ExternalDirectory,
{
  Ok(Json(service.query_external_users(req).await?))
}
