//! Supply records — a supplier's submitted batch of bottles.
//!
//! Records are created by the submission workflow and owned server-side;
//! the client only ever reads them back. Status and notes mutations are
//! admin-only operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, identity::Identity};

// ─── Bottle sizes ────────────────────────────────────────────────────────────

/// Package sizes accepted by the platform. Wire strings match the backend
/// enumeration exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BottleSize {
  #[serde(rename = "30cl")]
  Cl30,
  #[serde(rename = "50cl")]
  Cl50,
  #[serde(rename = "60cl")]
  Cl60,
  #[serde(rename = "75cl")]
  Cl75,
  #[default]
  #[serde(rename = "1L")]
  L1,
  #[serde(rename = "1.5L")]
  L1_5,
}

impl BottleSize {
  /// All sizes in display order (smallest first).
  pub const ALL: [BottleSize; 6] = [
    BottleSize::Cl30,
    BottleSize::Cl50,
    BottleSize::Cl60,
    BottleSize::Cl75,
    BottleSize::L1,
    BottleSize::L1_5,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      BottleSize::Cl30 => "30cl",
      BottleSize::Cl50 => "50cl",
      BottleSize::Cl60 => "60cl",
      BottleSize::Cl75 => "75cl",
      BottleSize::L1 => "1L",
      BottleSize::L1_5 => "1.5L",
    }
  }

  /// The next size in [`Self::ALL`], wrapping. Used by the form selector.
  pub fn next(&self) -> BottleSize {
    let i = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
    Self::ALL[(i + 1) % Self::ALL.len()]
  }

  /// The previous size in [`Self::ALL`], wrapping.
  pub fn prev(&self) -> BottleSize {
    let i = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
    Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
  }
}

impl std::fmt::Display for BottleSize {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::str::FromStr for BottleSize {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|size| size.as_str() == s)
      .ok_or_else(|| Error::UnknownBottleSize(s.to_string()))
  }
}

// ─── Status ──────────────────────────────────────────────────────────────────

/// Review state of a supply. Transitions happen server-side, driven by
/// admin status updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplyStatus {
  #[default]
  Pending,
  Approved,
  Paid,
  Rejected,
}

impl SupplyStatus {
  pub const ALL: [SupplyStatus; 4] = [
    SupplyStatus::Pending,
    SupplyStatus::Approved,
    SupplyStatus::Paid,
    SupplyStatus::Rejected,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      SupplyStatus::Pending => "pending",
      SupplyStatus::Approved => "approved",
      SupplyStatus::Paid => "paid",
      SupplyStatus::Rejected => "rejected",
    }
  }

  /// Cycle forward through [`Self::ALL`]; used by the admin edit context.
  pub fn next(&self) -> SupplyStatus {
    let i = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
    Self::ALL[(i + 1) % Self::ALL.len()]
  }

  pub fn prev(&self) -> SupplyStatus {
    let i = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
    Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
  }
}

impl std::fmt::Display for SupplyStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::str::FromStr for SupplyStatus {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|status| status.as_str() == s)
      .ok_or_else(|| Error::UnknownStatus(s.to_string()))
  }
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// A submitted batch of bottles, as returned by the backend.
///
/// `total_amount` is always `quantity × price_per_unit`; `cashback` is
/// authoritative only once the backend has returned it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supply {
  #[serde(rename = "_id")]
  pub id:             String,
  pub bottle_size:    BottleSize,
  pub quantity:       u32,
  pub price_per_unit: f64,
  pub total_amount:   f64,
  pub cashback:       f64,
  pub status:         SupplyStatus,
  #[serde(default)]
  pub notes:          String,
  pub created_at:     DateTime<Utc>,
}

/// A supply with its owning account embedded, as the admin listing returns
/// it (the backend populates the `userId` reference).
#[derive(Debug, Clone, Deserialize)]
pub struct SupplyWithOwner {
  #[serde(flatten)]
  pub supply: Supply,
  #[serde(rename = "userId")]
  pub owner:  Identity,
}

/// Per-user aggregate over supply records, computed server-side and
/// displayed read-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
  pub total_supplies: u64,
  pub total_amount:   f64,
  pub total_cashback: f64,
}

// ─── Status filter ───────────────────────────────────────────────────────────

/// Client-side filter over an already-fetched supply collection. Applying
/// it is pure — it never triggers a re-fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
  #[default]
  All,
  Pending,
  Approved,
  Paid,
}

impl StatusFilter {
  pub const ALL: [StatusFilter; 4] = [
    StatusFilter::All,
    StatusFilter::Pending,
    StatusFilter::Approved,
    StatusFilter::Paid,
  ];

  pub fn label(&self) -> &'static str {
    match self {
      StatusFilter::All => "all",
      StatusFilter::Pending => "pending",
      StatusFilter::Approved => "approved",
      StatusFilter::Paid => "paid",
    }
  }

  pub fn matches(&self, status: SupplyStatus) -> bool {
    match self {
      StatusFilter::All => true,
      StatusFilter::Pending => status == SupplyStatus::Pending,
      StatusFilter::Approved => status == SupplyStatus::Approved,
      StatusFilter::Paid => status == SupplyStatus::Paid,
    }
  }

  /// Cycle forward: all → pending → approved → paid → all.
  pub fn next(&self) -> StatusFilter {
    let i = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
    Self::ALL[(i + 1) % Self::ALL.len()]
  }
}
