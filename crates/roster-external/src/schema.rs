//! The upstream JSON schema and its translation into the RPC-facing shape.
//!
//! Optional leaves that are missing or `null` upstream decode to `None`.
//! Required strings and the id fall back to their zero value instead. Only a
//! structurally wrong body (bad JSON, wrong types) is an error.

use roster_core::external::{Address, Company, ExternalUser, Geo};
use serde::{Deserialize, Deserializer};

/// Decode `null` as `T::default()`. Missing keys are handled by
/// `#[serde(default)]` on the container.
fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamGeo {
  pub lat: Option<String>,
  pub lng: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamAddress {
  pub street:  Option<String>,
  pub suite:   Option<String>,
  pub city:    Option<String>,
  pub zipcode: Option<String>,
  pub geo:     Option<UpstreamGeo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpstreamCompany {
  #[serde(deserialize_with = "null_as_default")]
  pub name:         String,
  pub catch_phrase: Option<String>,
  pub bs:           Option<String>,
}

/// A user as served by `GET /users/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamUser {
  #[serde(deserialize_with = "null_as_default")]
  pub id:       i64,
  #[serde(deserialize_with = "null_as_default")]
  pub name:     String,
  #[serde(deserialize_with = "null_as_default")]
  pub username: String,
  #[serde(deserialize_with = "null_as_default")]
  pub email:    String,
  pub phone:    Option<String>,
  pub website:  Option<String>,
  pub address:  Option<UpstreamAddress>,
  pub company:  Option<UpstreamCompany>,
}

impl From<UpstreamGeo> for Geo {
  fn from(g: UpstreamGeo) -> Self {
    Geo {
      lat: g.lat,
      lng: g.lng,
    }
  }
}

impl From<UpstreamAddress> for Address {
  fn from(a: UpstreamAddress) -> Self {
    Address {
      street:  a.street,
      suite:   a.suite,
      city:    a.city,
      zipcode: a.zipcode,
      geo:     a.geo.map(Geo::from),
    }
  }
}

impl From<UpstreamCompany> for Company {
  fn from(c: UpstreamCompany) -> Self {
    Company {
      name:         c.name,
      catch_phrase: c.catch_phrase,
      bs:           c.bs,
    }
  }
}

impl From<UpstreamUser> for ExternalUser {
  fn from(u: UpstreamUser) -> Self {
    ExternalUser {
      id:       u.id.to_string(),
      name:     u.name,
      username: u.username,
      email:    u.email,
      phone:    u.phone,
      website:  u.website,
      address:  u.address.map(Address::from),
      company:  u.company.map(Company::from),
    }
  }
}
