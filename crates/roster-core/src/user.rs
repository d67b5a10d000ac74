//! User records and their nested profile.
//!
//! Field names and enum spellings follow the protobuf JSON mapping used by the
//! federation router, so a `User` can go straight onto the wire.

use serde::{Deserialize, Serialize};

use crate::activity::ActivityItem;

// ─── Enums ───────────────────────────────────────────────────────────────────

/// Access role. `Unspecified` is the zero value and doubles as "not supplied"
/// in a patch.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  strum::Display,
)]
pub enum UserRole {
  #[default]
  #[serde(rename = "USER_ROLE_UNSPECIFIED")]
  #[strum(serialize = "USER_ROLE_UNSPECIFIED")]
  Unspecified,
  #[serde(rename = "USER_ROLE_ADMIN")]
  #[strum(serialize = "USER_ROLE_ADMIN")]
  Admin,
  #[serde(rename = "USER_ROLE_USER")]
  #[strum(serialize = "USER_ROLE_USER")]
  User,
  #[serde(rename = "USER_ROLE_GUEST")]
  #[strum(serialize = "USER_ROLE_GUEST")]
  Guest,
}

/// UI theme preference.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  strum::Display,
)]
pub enum Theme {
  #[default]
  #[serde(rename = "THEME_UNSPECIFIED")]
  #[strum(serialize = "THEME_UNSPECIFIED")]
  Unspecified,
  #[serde(rename = "THEME_LIGHT")]
  #[strum(serialize = "THEME_LIGHT")]
  Light,
  #[serde(rename = "THEME_DARK")]
  #[strum(serialize = "THEME_DARK")]
  Dark,
  #[serde(rename = "THEME_AUTO")]
  #[strum(serialize = "THEME_AUTO")]
  Auto,
}

// ─── Profile ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
  pub display_name: Option<String>,
  /// IANA zone name, e.g. `Europe/London`. Not validated.
  pub timezone:     Option<String>,
  #[serde(default)]
  pub theme:        Theme,
}

// ─── User ────────────────────────────────────────────────────────────────────

/// A user record as held by the directory and returned to callers.
///
/// Records are plain values: the store hands out clones and takes ownership of
/// whatever is written back, so a response never aliases stored state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
  pub id:               String,
  #[serde(default)]
  pub name:             String,
  #[serde(default)]
  pub email:            String,
  #[serde(default)]
  pub role:             UserRole,
  #[serde(default)]
  pub permissions:      Vec<String>,
  pub tags:             Option<Vec<String>>,
  pub skill_categories: Option<Vec<Vec<String>>>,
  /// Newest first.
  #[serde(default)]
  pub recent_activity:  Vec<ActivityItem>,
  pub profile:          Option<Profile>,
  pub bio:              Option<String>,
  /// `Some(0)` is a real age; only `None` means unknown.
  pub age:              Option<i32>,
}

impl User {
  /// A stand-in carrying only `id`, used to keep batch lookups positional.
  pub fn placeholder(id: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      ..Self::default()
    }
  }
}
