//! The RPC-facing shape of an "external" user.
//!
//! External users mirror a third-party REST resource. They are a read-only
//! view and never mix with directory users. Every optional upstream string is
//! wrapped so that absence can be told apart from an empty value.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalUser {
  /// Decimal rendering of the upstream integer id.
  pub id:       String,
  pub name:     String,
  pub username: String,
  pub email:    String,
  pub phone:    Option<String>,
  pub website:  Option<String>,
  pub address:  Option<Address>,
  pub company:  Option<Company>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
  pub street:  Option<String>,
  pub suite:   Option<String>,
  pub city:    Option<String>,
  pub zipcode: Option<String>,
  pub geo:     Option<Geo>,
}

/// Coordinates are kept as the strings the upstream sends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geo {
  pub lat: Option<String>,
  pub lng: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
  pub name:         String,
  pub catch_phrase: Option<String>,
  pub bs:           Option<String>,
}
