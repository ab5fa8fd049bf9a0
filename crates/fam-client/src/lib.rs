//! Session storage and HTTP client for the FAM Bottling Co backend.
//!
//! Two pieces: [`session::SessionStore`], the durable token + identity
//! pair restored at startup, and [`client::ApiClient`], the typed REST
//! client that attaches the bearer token to every request.

pub mod client;
pub mod error;
pub mod session;

pub use client::{ApiClient, ApiConfig};
pub use error::{Error, Result};
pub use session::{Session, SessionStore};

#[cfg(test)]
mod tests;
