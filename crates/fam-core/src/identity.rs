//! Identity — the authenticated account as issued by the backend.
//!
//! Exactly one identity (or none) is held at a time. A login or register
//! response replaces any prior identity; logout destroys it.

use serde::{Deserialize, Serialize};

/// Authorization level of an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  User,
  Admin,
}

/// An authenticated account, shaped exactly as the backend serialises it
/// (camelCase fields, Mongo-style `_id`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
  #[serde(rename = "_id")]
  pub id:           String,
  pub name:         String,
  pub email:        String,
  pub role:         Role,
  /// Flagged by an administrator; returning customers earn cashback on
  /// approved supplies.
  #[serde(default)]
  pub is_returning: bool,
}

impl Identity {
  pub fn is_admin(&self) -> bool { self.role == Role::Admin }
}
