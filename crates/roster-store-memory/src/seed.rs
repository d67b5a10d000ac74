//! The fixed data set a directory is loaded with at startup.

use roster_core::{
  activity::{ActivityItem, Comment, Post},
  user::{Profile, Theme, User, UserRole},
};

/// Records to pre-load into a [`MemoryStore`](crate::MemoryStore).
#[derive(Debug, Clone, Default)]
pub struct Seed {
  pub users:    Vec<User>,
  pub posts:    Vec<Post>,
  pub comments: Vec<Comment>,
}

fn post(id: &str, title: &str, author_id: &str) -> Post {
  Post {
    id:        id.into(),
    title:     title.into(),
    author_id: author_id.into(),
  }
}

fn comment(id: &str, content: &str, author_id: &str) -> Comment {
  Comment {
    id:        id.into(),
    content:   content.into(),
    author_id: author_id.into(),
  }
}

fn strings(items: &[&str]) -> Vec<String> { items.iter().map(|s| s.to_string()).collect() }

fn skills(groups: &[&[&str]]) -> Option<Vec<Vec<String>>> {
  Some(groups.iter().map(|g| strings(g)).collect())
}

impl Seed {
  /// Four users with a handful of posts and comments between them.
  ///
  /// User `1` has activity `[post 1, post 2, comment 4]`, newest first.
  pub fn demo() -> Self {
    let posts = vec![
      post("1", "Getting Started with GraphQL", "1"),
      post("2", "Advanced Federation Patterns", "1"),
      post("3", "Building Scalable APIs", "2"),
      post("4", "TypeScript Best Practices", "3"),
    ];
    let comments = vec![
      comment("1", "Great post! Very helpful.", "2"),
      comment("2", "Thanks for sharing this.", "3"),
      comment("3", "Looking forward to more content.", "4"),
      comment("4", "Excellent examples provided.", "1"),
    ];

    let p = |i: usize| ActivityItem::post(posts[i - 1].clone());
    let c = |i: usize| ActivityItem::comment(comments[i - 1].clone());

    let users = vec![
      User {
        id:               "1".into(),
        name:             "Alice Johnson".into(),
        email:            "alice@example.com".into(),
        role:             UserRole::Admin,
        permissions:      strings(&["read", "write"]),
        tags:             Some(strings(&["admin", "user"])),
        skill_categories: skills(&[
          &["JavaScript", "TypeScript"],
          &["React", "Vue", "Angular"],
          &["Node.js", "Express"],
        ]),
        recent_activity:  vec![p(1), p(2), c(4)],
        profile:          Some(Profile {
          display_name: Some("Alice J.".into()),
          timezone:     Some("America/New_York".into()),
          theme:        Theme::Dark,
        }),
        bio:              Some("Full-stack developer with 5+ years of experience".into()),
        age:              Some(28),
      },
      User {
        id:               "2".into(),
        name:             "Bob Smith".into(),
        email:            "bob@example.com".into(),
        role:             UserRole::User,
        permissions:      strings(&["read"]),
        tags:             Some(strings(&["user"])),
        skill_categories: skills(&[&["Python", "Java"], &["Django", "Spring"]]),
        recent_activity:  vec![p(3), c(1)],
        profile:          Some(Profile {
          display_name: Some("Bob".into()),
          timezone:     Some("Europe/London".into()),
          theme:        Theme::Light,
        }),
        bio:              Some("Backend developer passionate about clean code".into()),
        age:              Some(32),
      },
      User {
        id:               "3".into(),
        name:             "Charlie Brown".into(),
        email:            "charlie@example.com".into(),
        role:             UserRole::User,
        permissions:      strings(&["read"]),
        tags:             Some(strings(&["user"])),
        skill_categories: skills(&[&["Go", "Rust"], &["Docker", "Kubernetes"]]),
        recent_activity:  vec![p(4), c(2)],
        profile:          Some(Profile {
          display_name: None,
          timezone:     Some("Asia/Tokyo".into()),
          theme:        Theme::Auto,
        }),
        bio:              None,
        age:              Some(29),
      },
      User {
        id:               "4".into(),
        name:             "Dana Lee".into(),
        email:            "dana@example.com".into(),
        role:             UserRole::Guest,
        permissions:      strings(&["read"]),
        tags:             Some(strings(&["guest"])),
        skill_categories: skills(&[&["HTML", "CSS"]]),
        recent_activity:  vec![c(3)],
        profile:          Some(Profile {
          display_name: Some("Dana".into()),
          timezone:     None,
          theme:        Theme::Light,
        }),
        bio:              Some("Learning web development".into()),
        age:              Some(24),
      },
    ];

    Self {
      users,
      posts,
      comments,
    }
  }
}
