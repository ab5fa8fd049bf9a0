//! Async HTTP client wrapping the FAM Bottling Co JSON API.

use std::time::Duration;

use fam_core::{
  draft::CashbackInfo,
  identity::Identity,
  supply::{BottleSize, Supply, SupplyStatus, SupplyWithOwner, Summary},
};
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::json;

use crate::{Error, Result};

/// Connection settings for the FAM backend.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  /// Base address of the REST API, e.g. `http://localhost:5000/api`.
  pub base_url: String,
}

// ─── Response shapes ─────────────────────────────────────────────────────────

/// Token + identity pair issued by login and register.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
  pub token: String,
  pub user:  Identity,
}

/// The created supply together with the backend's authoritative cashback
/// figures. The latter replace any client-side estimate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReceipt {
  pub supply:        Supply,
  pub cashback_info: Option<CashbackInfo>,
}

/// A user's own supplies plus the server-computed aggregate.
#[derive(Debug, Clone, Deserialize)]
pub struct MySupplies {
  pub supplies: Vec<Supply>,
  pub summary:  Summary,
}

#[derive(Debug, Clone, Deserialize)]
struct UserEnvelope {
  user: Identity,
}

#[derive(Debug, Clone, Deserialize)]
struct SupplyEnvelope {
  supply: Supply,
}

#[derive(Debug, Clone, Deserialize)]
struct SuppliesEnvelope {
  supplies: Vec<SupplyWithOwner>,
}

#[derive(Debug, Clone, Deserialize)]
struct Acknowledgement {
  #[serde(default)]
  message: Option<String>,
}

// ─── Client ──────────────────────────────────────────────────────────────────

/// Async HTTP client for the FAM JSON REST API.
///
/// Holds the current bearer token; when one is set, every request carries
/// `Authorization: Bearer <token>`. The inner [`reqwest::Client`] is
/// `Arc`-based and cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
  token:  Option<String>,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    // A hung backend must not leave a view loading forever.
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()?;
    Ok(Self {
      client,
      config,
      token: None,
    })
  }

  /// Attach a bearer token to all subsequent requests.
  pub fn set_token(&mut self, token: impl Into<String>) {
    self.token = Some(token.into());
  }

  /// Drop the held token; subsequent requests go out unauthenticated.
  pub fn clear_token(&mut self) { self.token = None; }

  pub fn has_token(&self) -> bool { self.token.is_some() }

  pub(crate) fn url(&self, path: &str) -> String {
    format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
  }

  fn auth(&self, req: RequestBuilder) -> RequestBuilder {
    match &self.token {
      Some(token) => req.bearer_auth(token),
      None => req,
    }
  }

  /// Decode a 2xx response, or turn a non-2xx one into [`Error::Rejected`]
  /// carrying the backend's message (else `fallback`).
  async fn expect<T: serde::de::DeserializeOwned>(
    resp: Response,
    fallback: &str,
  ) -> Result<T> {
    let status = resp.status();
    if !status.is_success() {
      let body = resp.bytes().await.unwrap_or_default();
      return Err(Error::Rejected {
        status:  status.as_u16(),
        message: extract_message(&body, fallback),
      });
    }
    Ok(resp.json().await?)
  }

  // ── Auth ──────────────────────────────────────────────────────────────────

  /// `POST /auth/register`
  pub async fn register(
    &self,
    name: &str,
    email: &str,
    password: &str,
    password_confirm: &str,
  ) -> Result<AuthSession> {
    let resp = self
      .auth(self.client.post(self.url("/auth/register")))
      .json(&json!({
        "name": name,
        "email": email,
        "password": password,
        "passwordConfirm": password_confirm,
      }))
      .send()
      .await?;
    Self::expect(resp, "Registration failed").await
  }

  /// `POST /auth/login`
  pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession> {
    let resp = self
      .auth(self.client.post(self.url("/auth/login")))
      .json(&json!({ "email": email, "password": password }))
      .send()
      .await?;
    Self::expect(resp, "Login failed").await
  }

  /// `GET /auth/profile`
  pub async fn profile(&self) -> Result<Identity> {
    let resp = self
      .auth(self.client.get(self.url("/auth/profile")))
      .send()
      .await?;
    Self::expect::<UserEnvelope>(resp, "Failed to load profile")
      .await
      .map(|e| e.user)
  }

  // ── Supply ────────────────────────────────────────────────────────────────

  /// `POST /supply`
  pub async fn submit_supply(
    &self,
    bottle_size: BottleSize,
    quantity: u32,
    price_per_unit: u32,
  ) -> Result<SubmitReceipt> {
    let resp = self
      .auth(self.client.post(self.url("/supply")))
      .json(&json!({
        "bottleSize": bottle_size,
        "quantity": quantity,
        "pricePerUnit": price_per_unit,
      }))
      .send()
      .await?;
    Self::expect(resp, "Failed to submit supply").await
  }

  /// `GET /supply/my`
  pub async fn my_supplies(&self) -> Result<MySupplies> {
    let resp = self
      .auth(self.client.get(self.url("/supply/my")))
      .send()
      .await?;
    Self::expect(resp, "Failed to load supplies").await
  }

  /// `GET /supply/:id`
  pub async fn supply_by_id(&self, id: &str) -> Result<Supply> {
    let resp = self
      .auth(self.client.get(self.url(&format!("/supply/{id}"))))
      .send()
      .await?;
    Self::expect::<SupplyEnvelope>(resp, "Failed to load supply")
      .await
      .map(|e| e.supply)
  }

  // ── Admin ─────────────────────────────────────────────────────────────────

  /// `GET /admin/supplies` — every supply on the platform, owner embedded.
  pub async fn all_supplies(&self) -> Result<Vec<SupplyWithOwner>> {
    let resp = self
      .auth(self.client.get(self.url("/admin/supplies")))
      .send()
      .await?;
    Self::expect::<SuppliesEnvelope>(resp, "Failed to load supplies")
      .await
      .map(|e| e.supplies)
  }

  /// `PATCH /admin/supply/:id`
  pub async fn update_supply_status(
    &self,
    id: &str,
    status: SupplyStatus,
    notes: &str,
  ) -> Result<Supply> {
    let resp = self
      .auth(self.client.patch(self.url(&format!("/admin/supply/{id}"))))
      .json(&json!({ "status": status, "notes": notes }))
      .send()
      .await?;
    Self::expect::<SupplyEnvelope>(resp, "Update failed")
      .await
      .map(|e| e.supply)
  }

  /// `PATCH /admin/user/:userId/returning`
  pub async fn toggle_returning(&self, user_id: &str) -> Result<Identity> {
    let resp = self
      .auth(
        self
          .client
          .patch(self.url(&format!("/admin/user/{user_id}/returning"))),
      )
      .send()
      .await?;
    Self::expect::<UserEnvelope>(resp, "Toggle failed")
      .await
      .map(|e| e.user)
  }

  /// `GET /admin/user/:userId`
  pub async fn user_details(&self, user_id: &str) -> Result<Identity> {
    let resp = self
      .auth(self.client.get(self.url(&format!("/admin/user/{user_id}"))))
      .send()
      .await?;
    Self::expect::<UserEnvelope>(resp, "Failed to load user")
      .await
      .map(|e| e.user)
  }

  // ── Contact ───────────────────────────────────────────────────────────────

  /// `POST /contact` — returns the acknowledgement message.
  pub async fn submit_contact(
    &self,
    name: &str,
    email: &str,
    subject: &str,
    message: &str,
  ) -> Result<String> {
    let resp = self
      .auth(self.client.post(self.url("/contact")))
      .json(&json!({
        "name": name,
        "email": email,
        "subject": subject,
        "message": message,
      }))
      .send()
      .await?;
    Self::expect::<Acknowledgement>(resp, "Failed to send message")
      .await
      .map(|ack| {
        ack
          .message
          .unwrap_or_else(|| "Message sent — we'll get back to you.".to_string())
      })
  }
}

/// Pull a human-readable message out of an error response body.
///
/// The backend answers rejections with `{"message": "..."}`; some
/// middleware layers use `{"error": "..."}` instead. Anything else falls
/// back to the caller's per-action string.
pub(crate) fn extract_message(body: &[u8], fallback: &str) -> String {
  #[derive(Deserialize)]
  struct ErrorBody {
    message: Option<String>,
    error:   Option<String>,
  }

  serde_json::from_slice::<ErrorBody>(body)
    .ok()
    .and_then(|b| b.message.or(b.error))
    .filter(|m| !m.is_empty())
    .unwrap_or_else(|| fallback.to_string())
}
