//! Handlers for the user lookup and update operations.
//!
//! | Path | Request | Response |
//! |------|---------|----------|
//! | `POST /LookupUserById` | `{"keys":[{"id":..}]}` | `{"result":[..]}`, one per key |
//! | `POST /QueryUser` | `{"id":..}` | `{"user":..}`, `null` if unknown |
//! | `POST /QueryUsers` | `{}` | `{"users":[..]}`, unordered |
//! | `POST /MutationUpdateUser` | `{"input":{..}}` | `{"updateUser":..}`, `null` if unknown |
//! | `POST /MutationUpdateUsers` | `{"input":[..]}` | `{"updateUsers":[..]}` |

use axum::{Json, extract::State};
use roster_core::{
  RecordService,
  messages::{
    LookupUserByIdRequest, LookupUserByIdResponse, QueryUserRequest, QueryUserResponse,
    QueryUsersRequest, QueryUsersResponse, UpdateUserRequest, UpdateUserResponse,
    UpdateUsersRequest, UpdateUsersResponse,
  },
  store::{ExternalDirectory, UserDirectory},
};

use crate::error::ApiError;

/// `POST /LookupUserById`
pub async fn lookup_user_by_id<D, X>(
  State(service): State<RecordService<D, X>>,
  Json(req): Json<LookupUserByIdRequest>,
) -> Result<Json<LookupUserByIdResponse>, ApiError>
where
  D: UserDirectory,
  X: ExternalDirectory,
{
  Ok(Json(service.lookup_user_by_id(req).await?))
}

/// `POST /QueryUser`
pub async fn query_user<D, X>(
  State(service): State<RecordService<D, X>>,
  Json(req): Json<QueryUserRequest>,
) -> Result<Json<QueryUserResponse>, ApiError>
where
  D: UserDirectory,
  X: ExternalDirectory,
{
  Ok(Json(service.query_user(req).await?))
}

/// `POST /QueryUsers`
pub async fn query_users<D, X>(
  State(service): State<RecordService<D, X>>,
  Json(req): Json<QueryUsersRequest>,
) -> Result<Json<QueryUsersResponse>, ApiError>
where
  D: UserDirectory,
  X: ExternalDirectory,
{
  Ok(Json(service.query_users(req).await?))
}

/// `POST /MutationUpdateUser`
pub async fn update_user<D, X>(
  State(service): State<RecordService<D, X>>,
  Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UpdateUserResponse>, ApiError>
where
  D: UserDirectory,
  X: ExternalDirectory,
{
  Ok(Json(service.update_user(req).await?))
}

/// `POST /MutationUpdateUsers`
pub async fn update_users<D, X>(
  State(service): State<RecordService<D, X>>,
  Json(req): Json<UpdateUsersRequest>,
) -> Result<Json<UpdateUsersResponse>, ApiError>
where
  D: UserDirectory,
  X: ExternalDirectory,
{
  Ok(Json(service.update_users(req).await?))
}
