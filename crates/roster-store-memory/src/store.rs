//! [`MemoryStore`]: the in-memory implementation of [`UserDirectory`].

use std::{collections::HashMap, sync::Arc};

use tokio::sync::Mutex;
use tracing::debug;

use roster_core::{
  activity::{ActivityItem, Comment, Post},
  patch::{self, UserPatch},
  store::UserDirectory,
  user::User,
};

use crate::{Error, Result, seed::Seed};

// ─── State ───────────────────────────────────────────────────────────────────

#[derive(Default)]
struct State {
  users:    HashMap<String, User>,
  posts:    HashMap<String, Post>,
  comments: HashMap<String, Comment>,
  /// user id → activity, newest first. Mirrors `User::recent_activity`.
  activity: HashMap<String, Vec<ActivityItem>>,
}

impl State {
  fn put_user(&mut self, user: User) {
    self
      .activity
      .insert(user.id.clone(), user.recent_activity.clone());
    self.users.insert(user.id.clone(), user);
  }

  /// `post count + 1`, stepping past ids a seed already occupies.
  fn next_post_id(&self) -> String {
    let mut n = self.posts.len() + 1;
    while self.posts.contains_key(&n.to_string()) {
      n += 1;
    }
    n.to_string()
  }

  fn prepend_activity(&mut self, user_id: &str, item: ActivityItem) -> Result<()> {
    let user = self
      .users
      .get_mut(user_id)
      .ok_or_else(|| Error::UserNotFound(user_id.to_owned()))?;
    user.recent_activity.insert(0, item);
    self
      .activity
      .insert(user_id.to_owned(), user.recent_activity.clone());
    Ok(())
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Roster directory held entirely in memory.
///
/// Cloning is cheap and clones share the same state.
#[derive(Clone, Default)]
pub struct MemoryStore {
  state: Arc<Mutex<State>>,
}

impl MemoryStore {
  /// An empty directory.
  pub fn new() -> Self { Self::default() }

  /// A directory pre-loaded with `seed`. Each user's activity index is taken
  /// from its `recent_activity`.
  pub fn from_seed(seed: Seed) -> Self {
    let mut state = State::default();
    for post in seed.posts {
      state.posts.insert(post.id.clone(), post);
    }
    for comment in seed.comments {
      state.comments.insert(comment.id.clone(), comment);
    }
    for user in seed.users {
      state.put_user(user);
    }
    Self {
      state: Arc::new(Mutex::new(state)),
    }
  }

  /// A directory pre-loaded with the demonstration data set.
  pub fn seeded() -> Self { Self::from_seed(Seed::demo()) }

  /// Number of users currently held.
  pub async fn user_count(&self) -> usize { self.state.lock().await.users.len() }
}

// ─── UserDirectory impl ──────────────────────────────────────────────────────

impl UserDirectory for MemoryStore {
  type Error = Error;

  // ── Users ─────────────────────────────────────────────────────────────────

  async fn get_user(&self, id: &str) -> Result<Option<User>> {
    Ok(self.state.lock().await.users.get(id).cloned())
  }

  async fn list_users(&self) -> Result<Vec<User>> {
    Ok(self.state.lock().await.users.values().cloned().collect())
  }

  async fn put_user(&self, user: User) -> Result<()> {
    self.state.lock().await.put_user(user);
    Ok(())
  }

  async fn update_user(&self, patch: &UserPatch) -> Result<Option<User>> {
    let mut state = self.state.lock().await;

    let Some(mut user) = state.users.get(&patch.id).cloned() else {
      return Ok(None);
    };

    let applied = patch::merge(&mut user, patch);
    debug!(user_id = %user.id, ?applied, "merged user patch");

    state.users.insert(user.id.clone(), user.clone());
    Ok(Some(user))
  }

  // ── Activity ──────────────────────────────────────────────────────────────

  async fn append_activity(&self, user_id: &str, item: ActivityItem) -> Result<()> {
    self.state.lock().await.prepend_activity(user_id, item)
  }

  async fn activity(&self, user_id: &str) -> Result<Option<Vec<ActivityItem>>> {
    Ok(self.state.lock().await.activity.get(user_id).cloned())
  }

  // ── Posts and comments ────────────────────────────────────────────────────

  async fn create_post(&self, title: String, author_id: String) -> Result<Post> {
    let mut state = self.state.lock().await;

    if !state.users.contains_key(&author_id) {
      return Err(Error::UserNotFound(author_id));
    }

    let post = Post {
      id: state.next_post_id(),
      title,
      author_id,
    };
    state.posts.insert(post.id.clone(), post.clone());
    state.prepend_activity(&post.author_id, ActivityItem::post(post.clone()))?;

    Ok(post)
  }

  async fn get_post(&self, id: &str) -> Result<Option<Post>> {
    Ok(self.state.lock().await.posts.get(id).cloned())
  }

  async fn get_comment(&self, id: &str) -> Result<Option<Comment>> {
    Ok(self.state.lock().await.comments.get(id).cloned())
  }
}
