//! The `UserDirectory` and `ExternalDirectory` traits.
//!
//! `UserDirectory` is implemented by storage backends (e.g.
//! `roster-store-memory`); `ExternalDirectory` by fetchers for the third-party
//! user source (e.g. `roster-external`). [`RecordService`](crate::RecordService)
//! depends on these abstractions, not on any concrete backend.

use std::future::Future;

use crate::{
  activity::{ActivityItem, Comment, Post},
  external::ExternalUser,
  patch::UserPatch,
  user::User,
};

// ─── Directory ───────────────────────────────────────────────────────────────

/// Abstraction over the authoritative user/post/comment store.
///
/// Reads copy records out and writes copy them in; no method hands back a
/// reference into stored state.
///
/// Errors must convert into [`crate::Error`] so that the service layer can
/// tell "author missing" apart from backend failures.
pub trait UserDirectory: Send + Sync {
  type Error: std::error::Error + Into<crate::Error> + Send + Sync + 'static;

  // ── Users ─────────────────────────────────────────────────────────────

  /// Retrieve a user by id. Returns `None` if not found.
  fn get_user<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + 'a;

  /// List all users. Order is unspecified.
  fn list_users(
    &self,
  ) -> impl Future<Output = Result<Vec<User>, Self::Error>> + Send + '_;

  /// Insert or wholesale-replace a user, keyed by `user.id`.
  ///
  /// The user's activity index is reset to `user.recent_activity`.
  fn put_user(
    &self,
    user: User,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Apply a sparse patch to the user named by `patch.id` and return the
  /// merged record, or `None` if there is no such user.
  ///
  /// The read, merge and write-back happen atomically with respect to other
  /// directory operations.
  fn update_user<'a>(
    &'a self,
    patch: &'a UserPatch,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + 'a;

  // ── Activity ──────────────────────────────────────────────────────────

  /// Prepend `item` to the user's embedded `recent_activity` and to the
  /// activity index. Fails if the user does not exist.
  fn append_activity<'a>(
    &'a self,
    user_id: &'a str,
    item: ActivityItem,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// The activity index for a user, newest first. `None` if the user has no
  /// index entry.
  fn activity<'a>(
    &'a self,
    user_id: &'a str,
  ) -> impl Future<Output = Result<Option<Vec<ActivityItem>>, Self::Error>> + Send + 'a;

  // ── Posts and comments ────────────────────────────────────────────────

  /// Create a post by `author_id` and record it as the author's newest
  /// activity. Fails without touching any state if the author is absent.
  ///
  /// Post ids are allocated as `existing post count + 1`.
  fn create_post(
    &self,
    title: String,
    author_id: String,
  ) -> impl Future<Output = Result<Post, Self::Error>> + Send + '_;

  fn get_post<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<Post>, Self::Error>> + Send + 'a;

  fn get_comment<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<Comment>, Self::Error>> + Send + 'a;
}

// ─── External source ─────────────────────────────────────────────────────────

/// Abstraction over the third-party user source.
///
/// Implementations translate the upstream payload into [`ExternalUser`]; no
/// retries, no partial results.
pub trait ExternalDirectory: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Fetch a single upstream user.
  fn fetch_user<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<ExternalUser, Self::Error>> + Send + 'a;

  /// Fetch the full upstream user list.
  fn fetch_users(
    &self,
  ) -> impl Future<Output = Result<Vec<ExternalUser>, Self::Error>> + Send + '_;
}
