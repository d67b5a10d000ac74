//! JSON RPC surface for Roster.
//!
//! Exposes an axum [`Router`] backed by a [`RecordService`]. Every operation
//! is a unary `POST /<Operation>` taking and returning a JSON message.
//! Transport, TLS, and mounting prefix are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/rpc", roster_api::api_router(service.clone()))
//! ```

pub mod activity;
pub mod error;
pub mod external;
pub mod users;

use axum::{Router, routing::post};
use roster_core::{
  RecordService,
  store::{ExternalDirectory, UserDirectory},
};

pub use error::ApiError;

/// Build a fully-materialised RPC router for `service`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<D, X>(service: RecordService<D, X>) -> Router<()>
where
  D: UserDirectory + 'static,
  X: ExternalDirectory + 'static,
{
  Router::new()
    // Users
    .route("/LookupUserById", post(users::lookup_user_by_id::<D, X>))
    .route("/QueryUser", post(users::query_user::<D, X>))
    .route("/QueryUsers", post(users::query_users::<D, X>))
    .route("/MutationUpdateUser", post(users::update_user::<D, X>))
    .route("/MutationUpdateUsers", post(users::update_users::<D, X>))
    // Activity
    .route("/QueryUserActivity", post(activity::query_user_activity::<D, X>))
    .route("/MutationCreatePost", post(activity::create_post::<D, X>))
    // External users
    .route("/QueryExternalUser", post(external::query_external_user::<D, X>))
    .route("/QueryExternalUsers", post(external::query_external_users::<D, X>))
    .with_state(service)
}

#[cfg(test)]
mod tests;
