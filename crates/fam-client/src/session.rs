//! Durable session storage — the token and identity that survive restarts.
//!
//! Two entries under one directory, mirroring the two browser-storage keys
//! of the hosted client: an opaque bearer token and the serialised
//! identity. Both are written together at login/register and removed
//! together at logout.

use std::{fs, io, path::PathBuf};

use fam_core::identity::Identity;

use crate::Result;

const TOKEN_FILE: &str = "token";
const IDENTITY_FILE: &str = "identity.json";

/// A restored or freshly-issued session.
#[derive(Debug, Clone)]
pub struct Session {
  pub token:    String,
  pub identity: Identity,
}

/// Reads and writes the durable session entries.
#[derive(Debug, Clone)]
pub struct SessionStore {
  dir: PathBuf,
}

impl SessionStore {
  pub fn new(dir: impl Into<PathBuf>) -> Self { Self { dir: dir.into() } }

  /// Restore the session, if both entries are present and well-formed.
  ///
  /// Anything short of that — missing files, unreadable files, an identity
  /// that no longer parses — yields `None`: the application starts logged
  /// out rather than failing. Must complete before the first route-guard
  /// decision so there is no flash of the wrong view.
  pub fn load(&self) -> Option<Session> {
    let token = match fs::read_to_string(self.dir.join(TOKEN_FILE)) {
      Ok(t) if !t.trim().is_empty() => t.trim().to_string(),
      Ok(_) => return None,
      Err(e) => {
        if e.kind() != io::ErrorKind::NotFound {
          tracing::warn!("unreadable session token: {e}");
        }
        return None;
      }
    };

    let raw = match fs::read_to_string(self.dir.join(IDENTITY_FILE)) {
      Ok(raw) => raw,
      Err(e) => {
        if e.kind() != io::ErrorKind::NotFound {
          tracing::warn!("unreadable session identity: {e}");
        }
        return None;
      }
    };

    match serde_json::from_str::<Identity>(&raw) {
      Ok(identity) => Some(Session { token, identity }),
      Err(e) => {
        tracing::warn!("malformed session identity, starting logged out: {e}");
        None
      }
    }
  }

  /// Persist both entries, creating the session directory if needed.
  pub fn save(&self, session: &Session) -> Result<()> {
    fs::create_dir_all(&self.dir)?;
    fs::write(self.dir.join(TOKEN_FILE), &session.token)?;
    let identity = serde_json::to_string(&session.identity)?;
    fs::write(self.dir.join(IDENTITY_FILE), identity)?;
    Ok(())
  }

  /// Remove both entries together. Missing entries are not an error, so
  /// logout is safe to repeat.
  pub fn clear(&self) -> Result<()> {
    for file in [TOKEN_FILE, IDENTITY_FILE] {
      match fs::remove_file(self.dir.join(file)) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
      }
    }
    Ok(())
  }
}
