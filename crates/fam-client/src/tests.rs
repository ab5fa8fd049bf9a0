//! Tests for the session store and the client's pure pieces.

use fam_core::identity::{Identity, Role};

use crate::{
  ApiClient, ApiConfig, Error, Session, SessionStore,
  client::extract_message,
};

fn identity() -> Identity {
  Identity {
    id:           "u1".into(),
    name:         "Ada Obi".into(),
    email:        "ada@example.com".into(),
    role:         Role::User,
    is_returning: false,
  }
}

// ─── Session store ───────────────────────────────────────────────────────────

#[test]
fn save_then_load_round_trips() {
  let dir = tempfile::tempdir().unwrap();
  let store = SessionStore::new(dir.path());

  let session = Session {
    token:    "tok-123".into(),
    identity: identity(),
  };
  store.save(&session).unwrap();

  let restored = store.load().expect("session should restore");
  assert_eq!(restored.token, "tok-123");
  assert_eq!(restored.identity.id, "u1");
  assert_eq!(restored.identity.role, Role::User);
}

#[test]
fn load_empty_dir_is_logged_out() {
  let dir = tempfile::tempdir().unwrap();
  let store = SessionStore::new(dir.path());
  assert!(store.load().is_none());
}

#[test]
fn malformed_identity_is_logged_out() {
  let dir = tempfile::tempdir().unwrap();
  let store = SessionStore::new(dir.path());
  std::fs::write(dir.path().join("token"), "tok").unwrap();
  std::fs::write(dir.path().join("identity.json"), "{not json").unwrap();
  assert!(store.load().is_none());
}

#[test]
fn token_without_identity_is_logged_out() {
  let dir = tempfile::tempdir().unwrap();
  let store = SessionStore::new(dir.path());
  std::fs::write(dir.path().join("token"), "tok").unwrap();
  assert!(store.load().is_none());
}

#[test]
fn blank_token_is_logged_out() {
  let dir = tempfile::tempdir().unwrap();
  let store = SessionStore::new(dir.path());
  store
    .save(&Session {
      token:    "tok".into(),
      identity: identity(),
    })
    .unwrap();
  std::fs::write(dir.path().join("token"), "  \n").unwrap();
  assert!(store.load().is_none());
}

#[test]
fn clear_removes_both_entries() {
  let dir = tempfile::tempdir().unwrap();
  let store = SessionStore::new(dir.path());
  store
    .save(&Session {
      token:    "tok".into(),
      identity: identity(),
    })
    .unwrap();

  store.clear().unwrap();
  assert!(!dir.path().join("token").exists());
  assert!(!dir.path().join("identity.json").exists());
  assert!(store.load().is_none());

  // Logout is safe to repeat.
  store.clear().unwrap();
}

// ─── Client ──────────────────────────────────────────────────────────────────

#[test]
fn url_joins_without_double_slash() {
  let client = ApiClient::new(ApiConfig {
    base_url: "http://localhost:5000/api/".into(),
  })
  .unwrap();
  assert_eq!(
    client.url("/supply/my"),
    "http://localhost:5000/api/supply/my"
  );
  assert_eq!(
    client.url("/admin/user/u1/returning"),
    "http://localhost:5000/api/admin/user/u1/returning"
  );
}

#[test]
fn token_lifecycle() {
  let mut client = ApiClient::new(ApiConfig {
    base_url: "http://localhost:5000/api".into(),
  })
  .unwrap();
  assert!(!client.has_token());
  client.set_token("tok");
  assert!(client.has_token());
  client.clear_token();
  assert!(!client.has_token());
}

#[test]
fn extract_message_prefers_backend_message() {
  let body = br#"{"message": "Invalid credentials"}"#;
  assert_eq!(extract_message(body, "Login failed"), "Invalid credentials");
}

#[test]
fn extract_message_accepts_error_key() {
  let body = br#"{"error": "forbidden"}"#;
  assert_eq!(extract_message(body, "fallback"), "forbidden");
}

#[test]
fn extract_message_falls_back_on_junk() {
  assert_eq!(extract_message(b"<html>502</html>", "Update failed"), "Update failed");
  assert_eq!(extract_message(b"", "Update failed"), "Update failed");
  assert_eq!(extract_message(br#"{"message": ""}"#, "Update failed"), "Update failed");
}

#[test]
fn rejected_error_displays_message_only() {
  let err = Error::Rejected {
    status:  400,
    message: "Quantity too large".into(),
  };
  assert_eq!(err.to_string(), "Quantity too large");
}
