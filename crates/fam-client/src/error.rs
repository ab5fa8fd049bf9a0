//! Error types for `fam-client`.
//!
//! [`Error::Rejected`] displays as its message alone, so callers can show
//! `error.to_string()` directly in an inline banner or alert line.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The backend answered with a non-2xx status. `message` is taken from
  /// the response body when it supplies one, else a per-action fallback.
  #[error("{message}")]
  Rejected { status: u16, message: String },

  /// The request never completed (connect failure, timeout, bad TLS) or
  /// a 2xx body failed to decode.
  #[error("request failed: {0}")]
  Transport(#[from] reqwest::Error),

  /// Reading or writing the durable session entries failed.
  #[error("session storage: {0}")]
  Storage(#[from] std::io::Error),

  /// The stored identity entry did not serialise/deserialise.
  #[error("malformed session entry: {0}")]
  Malformed(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
