//! Error types for `fam-core`.

use thiserror::Error;

use crate::draft::{MAX_UNIT_PRICE, MIN_UNIT_PRICE};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("quantity must be at least 1")]
  ZeroQuantity,

  #[error("price per unit must be between ₦{MIN_UNIT_PRICE} and ₦{MAX_UNIT_PRICE}, got ₦{0}")]
  PriceOutOfRange(u32),

  #[error("unknown bottle size: {0:?}")]
  UnknownBottleSize(String),

  #[error("unknown supply status: {0:?}")]
  UnknownStatus(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
