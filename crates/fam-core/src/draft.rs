//! The in-progress supply submission and its cashback preview.
//!
//! The draft lives entirely client-side. Its preview is an estimate only —
//! the authoritative cashback figure comes back from the backend after
//! submission and must replace it.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Error, Result, supply::BottleSize};

/// Lower bound of the accepted unit price, in Naira.
pub const MIN_UNIT_PRICE: u32 = 35;
/// Upper bound of the accepted unit price, in Naira.
pub const MAX_UNIT_PRICE: u32 = 80;

/// Cashback rate for returning customers.
pub const CASHBACK_RATE: f64 = 0.10;

/// A uniformly random unit price within the accepted range. Reseeded into
/// the price field whenever the bottle size changes — a market-price
/// default, not a validated business price.
pub fn random_unit_price() -> u32 {
  rand::rng().random_range(MIN_UNIT_PRICE..=MAX_UNIT_PRICE)
}

// ─── Preview ─────────────────────────────────────────────────────────────────

/// Cashback figures for an order. Used both for the ephemeral client-side
/// estimate and for the authoritative figures the backend returns with a
/// created supply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashbackInfo {
  pub total_amount:       f64,
  pub estimated_cashback: f64,
}

// ─── Draft ───────────────────────────────────────────────────────────────────

/// The supply submission form state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupplyDraft {
  pub bottle_size:    BottleSize,
  pub quantity:       u32,
  pub price_per_unit: u32,
}

impl Default for SupplyDraft {
  /// The post-reset form state: 1L, one unit, a fresh random price.
  fn default() -> Self {
    Self {
      bottle_size:    BottleSize::default(),
      quantity:       1,
      price_per_unit: random_unit_price(),
    }
  }
}

impl SupplyDraft {
  /// Change the bottle size and reseed the unit price. Quantity is left
  /// unchanged.
  pub fn set_bottle_size(&mut self, size: BottleSize) {
    self.bottle_size = size;
    self.price_per_unit = random_unit_price();
  }

  /// Recompute the ephemeral cashback preview from the current fields.
  ///
  /// `estimated_cashback` is `round(total × 0.10)` — the rate a returning
  /// customer would earn, contingent on that status and never guaranteed.
  pub fn preview(&self) -> CashbackInfo {
    let total_amount = f64::from(self.quantity) * f64::from(self.price_per_unit);
    CashbackInfo {
      total_amount,
      estimated_cashback: (total_amount * CASHBACK_RATE).round(),
    }
  }

  /// Client-side validation, run before any network call.
  pub fn validate(&self) -> Result<()> {
    if self.quantity == 0 {
      return Err(Error::ZeroQuantity);
    }
    if !(MIN_UNIT_PRICE..=MAX_UNIT_PRICE).contains(&self.price_per_unit) {
      return Err(Error::PriceOutOfRange(self.price_per_unit));
    }
    Ok(())
  }
}
