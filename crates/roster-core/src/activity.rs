//! Posts, comments, and the activity items that wrap them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
  pub id:        String,
  pub title:     String,
  pub author_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
  pub id:        String,
  pub content:   String,
  pub author_id: String,
}

/// One entry in a user's activity feed: exactly one post or one comment.
///
/// Serialises as `{"post": {..}}` or `{"comment": {..}}`, matching the oneof
/// encoding the router expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityItem {
  Post(Post),
  Comment(Comment),
}

impl ActivityItem {
  pub fn post(post: Post) -> Self { Self::Post(post) }

  pub fn comment(comment: Comment) -> Self { Self::Comment(comment) }

  pub fn as_post(&self) -> Option<&Post> {
    match self {
      Self::Post(p) => Some(p),
      Self::Comment(_) => None,
    }
  }

  pub fn as_comment(&self) -> Option<&Comment> {
    match self {
      Self::Comment(c) => Some(c),
      Self::Post(_) => None,
    }
  }

  /// Id of the wrapped post or comment.
  pub fn id(&self) -> &str {
    match self {
      Self::Post(p) => &p.id,
      Self::Comment(c) => &c.id,
    }
  }
}
