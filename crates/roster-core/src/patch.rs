//! Sparse patches and the per-field rules that merge them into a [`User`].
//!
//! A patch only affects the fields it supplies. What counts as "supplied" is
//! decided per field by a [`Gate`]:
//!
//! | Field | Gate |
//! |-------|------|
//! | `name`, `email`, `bio` | [`Gate::NonEmpty`]: an empty string is ignored |
//! | `role` | [`Gate::NonEmpty`]: `USER_ROLE_UNSPECIFIED` is ignored |
//! | `permissions`, `tags`, `skillCategories` | [`Gate::NonEmpty`]: an empty list never clears |
//! | `age` | [`Gate::Present`]: `0` is written |
//! | `profile` | [`Gate::Present`]: then each sub-field is gated on its own |
//!
//! Consequence: a patch can never clear a string or list field, nor reset the
//! role or theme to unspecified, but it can set `age` to zero.

use serde::{Deserialize, Serialize};

use crate::user::{Profile, Theme, User, UserRole};

// ─── Patch inputs ────────────────────────────────────────────────────────────

/// Partial update for a single user. Every patchable field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
  /// The user to update. Not patchable itself.
  #[serde(default)]
  pub id:               String,
  pub name:             Option<String>,
  pub email:            Option<String>,
  pub role:             Option<UserRole>,
  pub permissions:      Option<Vec<String>>,
  pub tags:             Option<Vec<String>>,
  pub skill_categories: Option<Vec<Vec<String>>>,
  pub profile:          Option<ProfilePatch>,
  pub bio:              Option<String>,
  pub age:              Option<i32>,
}

impl UserPatch {
  /// An otherwise-empty patch addressed to `id`.
  pub fn for_user(id: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      ..Self::default()
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
  pub display_name: Option<String>,
  pub timezone:     Option<String>,
  pub theme:        Option<Theme>,
}

// ─── Gates ───────────────────────────────────────────────────────────────────

/// The zero value of a patchable type.
pub trait Blank {
  fn is_blank(&self) -> bool;
}

impl Blank for String {
  fn is_blank(&self) -> bool { self.is_empty() }
}

impl<T> Blank for Vec<T> {
  fn is_blank(&self) -> bool { self.is_empty() }
}

impl Blank for i32 {
  fn is_blank(&self) -> bool { *self == 0 }
}

impl Blank for UserRole {
  fn is_blank(&self) -> bool { *self == UserRole::Unspecified }
}

impl Blank for Theme {
  fn is_blank(&self) -> bool { *self == Theme::Unspecified }
}

impl Blank for ProfilePatch {
  fn is_blank(&self) -> bool {
    self.display_name.is_none() && self.timezone.is_none() && self.theme.is_none()
  }
}

/// Decides whether a supplied patch value takes effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
  /// The value must be present and not [`Blank`].
  NonEmpty,
  /// The value must be present; blank values are written too.
  Present,
}

impl Gate {
  /// Return the value if it passes this gate.
  pub fn admit<T: Blank>(self, value: Option<&T>) -> Option<&T> {
    let value = value?;
    match self {
      Gate::Present => Some(value),
      Gate::NonEmpty if value.is_blank() => None,
      Gate::NonEmpty => Some(value),
    }
  }
}

// ─── Rules ───────────────────────────────────────────────────────────────────

/// One patchable field: its name, its gate, and how to write it.
///
/// `apply` returns `true` if it changed the target.
pub struct FieldRule<T, P> {
  pub field: &'static str,
  pub gate:  Gate,
  apply:     fn(&mut T, &P, Gate) -> bool,
}

/// Rules for the top-level user fields, in application order.
pub static USER_RULES: &[FieldRule<User, UserPatch>] = &[
  FieldRule {
    field: "name",
    gate:  Gate::NonEmpty,
    apply: |u, p, g| assign(&mut u.name, g.admit(p.name.as_ref())),
  },
  FieldRule {
    field: "email",
    gate:  Gate::NonEmpty,
    apply: |u, p, g| assign(&mut u.email, g.admit(p.email.as_ref())),
  },
  FieldRule {
    field: "role",
    gate:  Gate::NonEmpty,
    apply: |u, p, g| assign(&mut u.role, g.admit(p.role.as_ref())),
  },
  FieldRule {
    field: "permissions",
    gate:  Gate::NonEmpty,
    apply: |u, p, g| assign(&mut u.permissions, g.admit(p.permissions.as_ref())),
  },
  FieldRule {
    field: "tags",
    gate:  Gate::NonEmpty,
    apply: |u, p, g| assign_some(&mut u.tags, g.admit(p.tags.as_ref())),
  },
  FieldRule {
    field: "skillCategories",
    gate:  Gate::NonEmpty,
    apply: |u, p, g| {
      assign_some(&mut u.skill_categories, g.admit(p.skill_categories.as_ref()))
    },
  },
  FieldRule {
    field: "bio",
    gate:  Gate::NonEmpty,
    apply: |u, p, g| assign_some(&mut u.bio, g.admit(p.bio.as_ref())),
  },
  FieldRule {
    field: "age",
    gate:  Gate::Present,
    apply: |u, p, g| assign_some(&mut u.age, g.admit(p.age.as_ref())),
  },
  FieldRule {
    field: "profile",
    gate:  Gate::Present,
    apply: |u, p, g| match g.admit(p.profile.as_ref()) {
      Some(patch) => {
        let profile = u.profile.get_or_insert_with(Profile::default);
        apply_rules(PROFILE_RULES, profile, patch);
        true
      }
      None => false,
    },
  },
];

/// Rules for the nested profile, applied once a profile patch is admitted.
pub static PROFILE_RULES: &[FieldRule<Profile, ProfilePatch>] = &[
  FieldRule {
    field: "displayName",
    gate:  Gate::NonEmpty,
    apply: |t, p, g| assign_some(&mut t.display_name, g.admit(p.display_name.as_ref())),
  },
  FieldRule {
    field: "timezone",
    gate:  Gate::NonEmpty,
    apply: |t, p, g| assign_some(&mut t.timezone, g.admit(p.timezone.as_ref())),
  },
  FieldRule {
    field: "theme",
    gate:  Gate::NonEmpty,
    apply: |t, p, g| assign(&mut t.theme, g.admit(p.theme.as_ref())),
  },
];

fn assign<T: Clone>(target: &mut T, value: Option<&T>) -> bool {
  match value {
    Some(v) => {
      *target = v.clone();
      true
    }
    None => false,
  }
}

fn assign_some<T: Clone>(target: &mut Option<T>, value: Option<&T>) -> bool {
  match value {
    Some(v) => {
      *target = Some(v.clone());
      true
    }
    None => false,
  }
}

/// Run every rule in `rules` against `target`, returning the names of the
/// fields that were written.
pub fn apply_rules<T, P>(
  rules: &[FieldRule<T, P>],
  target: &mut T,
  patch: &P,
) -> Vec<&'static str> {
  rules
    .iter()
    .filter(|rule| (rule.apply)(target, patch, rule.gate))
    .map(|rule| rule.field)
    .collect()
}

/// Merge `patch` into `user` in place. The patch's `id` is not consulted;
/// matching the patch to the right record is the caller's job.
pub fn merge(user: &mut User, patch: &UserPatch) -> Vec<&'static str> {
  apply_rules(USER_RULES, user, patch)
}
