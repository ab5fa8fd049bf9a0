//! Core types and pure logic for the FAM Bottling Co supplier client.
//!
//! This crate is deliberately free of HTTP and terminal dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod draft;
pub mod error;
pub mod identity;
pub mod route;
pub mod supply;

pub use error::{Error, Result};

#[cfg(test)]
mod tests;
