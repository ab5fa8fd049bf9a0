//! Application state machine and event dispatcher.
//!
//! Every navigation goes through the route guard; every user-triggered
//! request is issued and awaited inline, with per-screen loading flags
//! gating what gets rendered. Mutations never merge optimistically — a
//! successful admin write always re-fetches the full collection.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fam_client::{ApiClient, Session, SessionStore, client::AuthSession};
use fam_core::{
  draft::CashbackInfo,
  identity::{Identity, Role},
  route::{Route, settle},
  supply::{StatusFilter, Supply, SupplyWithOwner, Summary},
};

use crate::forms::{
  ContactForm, EditContext, LoginForm, RegisterForm, SUPPLY_FOCUS_PRICE,
  SUPPLY_FOCUS_QUANTITY, SUPPLY_FOCUS_SIZE, SUPPLY_FIELDS, SupplyForm,
};

// ─── Screen ───────────────────────────────────────────────────────────────────

/// One screen per route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
  #[default]
  Landing,
  Founders,
  Contact,
  Login,
  Register,
  Supply,
  Dashboard,
  Admin,
}

impl Screen {
  pub fn for_route(route: Route) -> Screen {
    match route {
      Route::Landing => Screen::Landing,
      Route::Founders => Screen::Founders,
      Route::Contact => Screen::Contact,
      Route::Login => Screen::Login,
      Route::Register => Screen::Register,
      Route::Supply => Screen::Supply,
      Route::Dashboard => Screen::Dashboard,
      Route::Admin => Screen::Admin,
    }
  }
}

// ─── Per-screen state ─────────────────────────────────────────────────────────

/// The supplier dashboard: own supplies, the server-side aggregate, and a
/// purely client-side status filter.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
  pub supplies: Vec<Supply>,
  pub summary:  Summary,
  pub filter:   StatusFilter,
  pub loading:  bool,
  pub error:    String,
}

impl DashboardState {
  /// Apply the status filter to the already-fetched collection. Never
  /// triggers a re-fetch.
  pub fn filtered(&self) -> Vec<&Supply> {
    self
      .supplies
      .iter()
      .filter(|s| self.filter.matches(s.status))
      .collect()
  }
}

/// The admin review screen: every supply on the platform with its owner,
/// a cursor, and the optional status-edit dialog.
#[derive(Debug, Clone, Default)]
pub struct AdminState {
  pub supplies: Vec<SupplyWithOwner>,
  pub cursor:   usize,
  pub loading:  bool,
  pub error:    String,
  /// Blocking alert for failed secondary actions; dismissed by any key.
  pub alert:    Option<String>,
  pub edit:     Option<EditContext>,
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  pub screen:   Screen,
  /// The authenticated account, if any. Written at login, register and
  /// logout; read everywhere else.
  pub identity: Option<Identity>,
  pub client:   ApiClient,
  pub sessions: SessionStore,
  /// One-line message shown in the status bar.
  pub status_msg: String,

  pub login:     LoginForm,
  pub register:  RegisterForm,
  pub contact:   ContactForm,
  pub supply:    SupplyForm,
  pub dashboard: DashboardState,
  pub admin:     AdminState,
}

impl App {
  /// Build the app from a restored (or empty) session. The session is
  /// loaded before the first frame, so the first guard decision already
  /// sees the right identity.
  pub fn new(mut client: ApiClient, sessions: SessionStore, restored: Option<Session>) -> Self {
    let identity = restored.map(|session| {
      client.set_token(session.token);
      session.identity
    });
    Self {
      screen: Screen::Landing,
      identity,
      client,
      sessions,
      status_msg: String::new(),
      login: LoginForm::new(),
      register: RegisterForm::new(),
      contact: ContactForm::default(),
      supply: SupplyForm::new(),
      dashboard: DashboardState::default(),
      admin: AdminState::default(),
    }
  }

  pub fn role(&self) -> Option<Role> { self.identity.as_ref().map(|i| i.role) }

  // ── Navigation ────────────────────────────────────────────────────────────

  /// Guard the requested route, follow any redirects, and mount the
  /// resulting screen. Mounting resets form state (the ephemeral preview
  /// is discarded on navigation) and fetches collections for the data
  /// screens.
  pub async fn navigate(&mut self, requested: Route) {
    let destination = settle(self.role(), Some(requested));
    self.screen = Screen::for_route(destination);

    match self.screen {
      Screen::Login => self.login = LoginForm::new(),
      Screen::Register => self.register = RegisterForm::new(),
      Screen::Contact => self.contact = ContactForm::default(),
      Screen::Supply => self.supply = SupplyForm::new(),
      Screen::Dashboard => self.load_dashboard().await,
      Screen::Admin => self.load_admin().await,
      Screen::Landing | Screen::Founders => {}
    }
  }

  fn logout(&mut self) {
    if let Err(e) = self.sessions.clear() {
      tracing::warn!("clearing session entries failed: {e}");
      self.status_msg = format!("Logout warning: {e}");
    }
    self.identity = None;
    self.client.clear_token();
  }

  /// Persist and adopt a freshly-issued session, then land on the
  /// dashboard.
  async fn establish_session(&mut self, auth: AuthSession) {
    let session = Session {
      token:    auth.token,
      identity: auth.user,
    };
    if let Err(e) = self.sessions.save(&session) {
      // Still signed in for this run; only the restart restore is lost.
      tracing::warn!("persisting session failed: {e}");
      self.status_msg = format!("Session not persisted: {e}");
    }
    self.client.set_token(session.token.clone());
    self.identity = Some(session.identity);
    self.navigate(Route::Dashboard).await;
  }

  // ── Data loading ──────────────────────────────────────────────────────────

  async fn load_dashboard(&mut self) {
    let filter = self.dashboard.filter;
    self.dashboard = DashboardState {
      filter,
      loading: true,
      ..DashboardState::default()
    };
    match self.client.my_supplies().await {
      Ok(data) => {
        self.dashboard.supplies = data.supplies;
        self.dashboard.summary = data.summary;
      }
      Err(e) => self.dashboard.error = e.to_string(),
    }
    self.dashboard.loading = false;
  }

  async fn load_admin(&mut self) {
    let cursor = self.admin.cursor;
    self.admin = AdminState {
      loading: true,
      ..AdminState::default()
    };
    match self.client.all_supplies().await {
      Ok(supplies) => {
        self.admin.cursor = cursor.min(supplies.len().saturating_sub(1));
        self.admin.supplies = supplies;
      }
      Err(e) => self.admin.error = e.to_string(),
    }
    self.admin.loading = false;
  }

  // ── Submissions ───────────────────────────────────────────────────────────

  async fn submit_login(&mut self) {
    if self.login.loading {
      return;
    }
    self.login.error.clear();
    if self.login.email.is_empty() || self.login.password.is_empty() {
      self.login.error = "Email and password are required".to_string();
      return;
    }
    self.login.loading = true;
    let email = self.login.email.value.trim().to_string();
    let password = self.login.password.value.clone();
    match self.client.login(&email, &password).await {
      Ok(auth) => {
        self.login.loading = false;
        self.establish_session(auth).await;
      }
      Err(e) => {
        // Inline error; the form keeps its values for a retry.
        self.login.error = e.to_string();
        self.login.loading = false;
      }
    }
  }

  async fn submit_register(&mut self) {
    if self.register.loading {
      return;
    }
    self.register.error.clear();
    if let Err(msg) = self.register.validate() {
      self.register.error = msg;
      return;
    }
    self.register.loading = true;
    let name = self.register.name.value.trim().to_string();
    let email = self.register.email.value.trim().to_string();
    let password = self.register.password.value.clone();
    let confirm = self.register.confirm.value.clone();
    match self.client.register(&name, &email, &password, &confirm).await {
      Ok(auth) => {
        self.register.loading = false;
        self.establish_session(auth).await;
      }
      Err(e) => {
        self.register.error = e.to_string();
        self.register.loading = false;
      }
    }
  }

  async fn submit_contact(&mut self) {
    if self.contact.loading {
      return;
    }
    self.contact.error.clear();
    self.contact.success.clear();
    if let Err(msg) = self.contact.validate() {
      self.contact.error = msg;
      return;
    }
    self.contact.loading = true;
    let name = self.contact.name.value.trim().to_string();
    let email = self.contact.email.value.trim().to_string();
    let subject = self.contact.subject.value.trim().to_string();
    let message = self.contact.message.value.clone();
    match self
      .client
      .submit_contact(&name, &email, &subject, &message)
      .await
    {
      Ok(ack) => {
        self.contact = ContactForm::default();
        self.contact.success = ack;
      }
      Err(e) => self.contact.error = e.to_string(),
    }
    self.contact.loading = false;
  }

  async fn submit_supply(&mut self) {
    if self.supply.loading {
      return;
    }
    self.supply.error.clear();
    self.supply.success.clear();

    // Client-side validation happens before any network call.
    let draft = self.supply.draft();
    if let Err(e) = draft.validate() {
      self.supply.error = e.to_string();
      return;
    }

    self.supply.loading = true;
    match self
      .client
      .submit_supply(draft.bottle_size, draft.quantity, draft.price_per_unit)
      .await
    {
      Ok(receipt) => {
        let banner =
          format!("Supply submitted successfully! Order ID: {}", receipt.supply.id);
        // The backend's figures are authoritative from here on.
        let figures = receipt.cashback_info.or(Some(CashbackInfo {
          total_amount:       receipt.supply.total_amount,
          estimated_cashback: receipt.supply.cashback,
        }));
        self.supply.reset_after_success(banner, figures);
      }
      Err(e) => {
        // Form state is preserved so the user can retry without
        // re-entering anything.
        self.supply.error = e.to_string();
      }
    }
    self.supply.loading = false;
  }

  // ── Admin actions ─────────────────────────────────────────────────────────

  fn open_edit(&mut self) {
    if let Some(record) = self.admin.supplies.get(self.admin.cursor) {
      self.admin.edit = Some(EditContext::seeded(
        record.supply.id.clone(),
        record.supply.status,
        record.supply.notes.clone(),
      ));
    }
  }

  async fn confirm_edit(&mut self) {
    let Some(edit) = self.admin.edit.clone() else {
      return;
    };
    match self
      .client
      .update_supply_status(&edit.supply_id, edit.status, &edit.notes.value)
      .await
    {
      Ok(_) => {
        self.admin.edit = None;
        // The list is backend-authoritative after a write.
        self.load_admin().await;
      }
      Err(e) => self.admin.alert = Some(e.to_string()),
    }
  }

  async fn toggle_returning(&mut self) {
    let Some(record) = self.admin.supplies.get(self.admin.cursor) else {
      return;
    };
    let user_id = record.owner.id.clone();
    match self.client.toggle_returning(&user_id).await {
      Ok(_) => self.load_admin().await,
      Err(e) => self.admin.alert = Some(e.to_string()),
    }
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return Ok(false);
    }
    self.status_msg.clear();

    // A blocking alert swallows the next key.
    if self.screen == Screen::Admin && self.admin.alert.is_some() {
      self.admin.alert = None;
      return Ok(true);
    }

    match self.screen {
      Screen::Landing | Screen::Founders => self.handle_nav_key(key).await,
      Screen::Contact => self.handle_contact_key(key).await,
      Screen::Login => self.handle_login_key(key).await,
      Screen::Register => self.handle_register_key(key).await,
      Screen::Supply => self.handle_supply_key(key).await,
      Screen::Dashboard => self.handle_dashboard_key(key).await,
      Screen::Admin => self.handle_admin_key(key).await,
    }
  }

  /// Letter navigation, shared by every non-form screen.
  async fn handle_nav_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      KeyCode::Char('q') => return Ok(false),
      KeyCode::Char('m') => self.navigate(Route::Founders).await,
      KeyCode::Char('c') => self.navigate(Route::Contact).await,
      KeyCode::Char('l') => self.navigate(Route::Login).await,
      KeyCode::Char('r') => self.navigate(Route::Register).await,
      KeyCode::Char('s') => self.navigate(Route::Supply).await,
      KeyCode::Char('d') => self.navigate(Route::Dashboard).await,
      KeyCode::Char('a') => self.navigate(Route::Admin).await,
      KeyCode::Char('o') if self.identity.is_some() => {
        self.logout();
        self.navigate(Route::Landing).await;
      }
      KeyCode::Esc => self.navigate(Route::Landing).await,
      _ => {}
    }
    Ok(true)
  }

  async fn handle_login_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      KeyCode::Esc => self.navigate(Route::Landing).await,
      KeyCode::Enter => self.submit_login().await,
      KeyCode::Tab | KeyCode::Down => {
        self.login.focus = (self.login.focus + 1) % LoginForm::FIELDS;
      }
      KeyCode::BackTab | KeyCode::Up => {
        self.login.focus = (self.login.focus + LoginForm::FIELDS - 1) % LoginForm::FIELDS;
      }
      KeyCode::Backspace => self.login.focused_mut().backspace(),
      KeyCode::Char(c) => self.login.focused_mut().push(c),
      _ => {}
    }
    Ok(true)
  }

  async fn handle_register_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      KeyCode::Esc => self.navigate(Route::Landing).await,
      KeyCode::Enter => self.submit_register().await,
      KeyCode::Tab | KeyCode::Down => {
        self.register.focus = (self.register.focus + 1) % RegisterForm::FIELDS;
      }
      KeyCode::BackTab | KeyCode::Up => {
        self.register.focus =
          (self.register.focus + RegisterForm::FIELDS - 1) % RegisterForm::FIELDS;
      }
      KeyCode::Backspace => self.register.focused_mut().backspace(),
      KeyCode::Char(c) => self.register.focused_mut().push(c),
      _ => {}
    }
    Ok(true)
  }

  async fn handle_contact_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      KeyCode::Esc => self.navigate(Route::Landing).await,
      KeyCode::Enter => self.submit_contact().await,
      KeyCode::Tab | KeyCode::Down => {
        self.contact.focus = (self.contact.focus + 1) % ContactForm::FIELDS;
      }
      KeyCode::BackTab | KeyCode::Up => {
        self.contact.focus =
          (self.contact.focus + ContactForm::FIELDS - 1) % ContactForm::FIELDS;
      }
      KeyCode::Backspace => self.contact.focused_mut().backspace(),
      KeyCode::Char(c) => self.contact.focused_mut().push(c),
      _ => {}
    }
    Ok(true)
  }

  async fn handle_supply_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      KeyCode::Esc => self.navigate(Route::Dashboard).await,
      KeyCode::Enter => self.submit_supply().await,
      KeyCode::Tab | KeyCode::Down => {
        self.supply.focus = (self.supply.focus + 1) % SUPPLY_FIELDS;
      }
      KeyCode::BackTab | KeyCode::Up => {
        self.supply.focus = (self.supply.focus + SUPPLY_FIELDS - 1) % SUPPLY_FIELDS;
      }
      // Left/Right cycle the bottle size; every change reseeds the price.
      KeyCode::Right if self.supply.focus == SUPPLY_FOCUS_SIZE => {
        self.supply.change_size(self.supply.bottle_size.next());
      }
      KeyCode::Left if self.supply.focus == SUPPLY_FOCUS_SIZE => {
        self.supply.change_size(self.supply.bottle_size.prev());
      }
      KeyCode::Backspace if self.supply.focus == SUPPLY_FOCUS_QUANTITY => {
        self.supply.quantity.backspace();
        self.supply.recompute();
      }
      KeyCode::Backspace if self.supply.focus == SUPPLY_FOCUS_PRICE => {
        self.supply.price.backspace();
        self.supply.recompute();
      }
      // Quantity and price accept digits only.
      KeyCode::Char(c) if c.is_ascii_digit() => {
        match self.supply.focus {
          SUPPLY_FOCUS_QUANTITY => self.supply.quantity.push(c),
          SUPPLY_FOCUS_PRICE => self.supply.price.push(c),
          _ => return Ok(true),
        }
        self.supply.recompute();
      }
      _ => {}
    }
    Ok(true)
  }

  async fn handle_dashboard_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      // Pure client-side filter; cycling never re-fetches.
      KeyCode::Char('f') => self.dashboard.filter = self.dashboard.filter.next(),
      KeyCode::Char('g') => self.load_dashboard().await,
      _ => return self.handle_nav_key(key).await,
    }
    Ok(true)
  }

  async fn handle_admin_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    // Status-edit dialog captures everything while open.
    if let Some(edit) = self.admin.edit.as_mut() {
      match key.code {
        KeyCode::Esc => self.admin.edit = None,
        KeyCode::Enter => self.confirm_edit().await,
        KeyCode::Right => edit.status = edit.status.next(),
        KeyCode::Left => edit.status = edit.status.prev(),
        KeyCode::Backspace => edit.notes.backspace(),
        KeyCode::Char(c) => edit.notes.push(c),
        _ => {}
      }
      return Ok(true);
    }

    match key.code {
      KeyCode::Down | KeyCode::Char('j') => {
        if self.admin.cursor + 1 < self.admin.supplies.len() {
          self.admin.cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.admin.cursor = self.admin.cursor.saturating_sub(1);
      }
      KeyCode::Char('e') => self.open_edit(),
      KeyCode::Char('t') => self.toggle_returning().await,
      KeyCode::Char('g') => self.load_admin().await,
      _ => return self.handle_nav_key(key).await,
    }
    Ok(true)
  }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use chrono::Utc;
  use fam_client::{ApiClient, ApiConfig, Session, SessionStore};
  use fam_core::{
    identity::{Identity, Role},
    route::Route,
    supply::{BottleSize, StatusFilter, Supply, SupplyStatus},
  };
  use tempfile::TempDir;

  use super::{App, DashboardState, Screen};

  fn identity(role: Role) -> Identity {
    Identity {
      id:           "u1".into(),
      name:         "Ada Obi".into(),
      email:        "ada@example.com".into(),
      role,
      is_returning: false,
    }
  }

  /// An app whose client points at a port nothing listens on, so any
  /// accidental request fails fast with a transport error.
  fn app(role: Option<Role>) -> (App, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let sessions = SessionStore::new(dir.path());
    let client = ApiClient::new(ApiConfig {
      base_url: "http://127.0.0.1:1/api".into(),
    })
    .unwrap();
    let restored = role.map(|role| Session {
      token:    "tok".into(),
      identity: identity(role),
    });
    (App::new(client, sessions, restored), dir)
  }

  fn supply(status: SupplyStatus) -> Supply {
    Supply {
      id: "s1".into(),
      bottle_size: BottleSize::L1,
      quantity: 2,
      price_per_unit: 40.0,
      total_amount: 80.0,
      cashback: 0.0,
      status,
      notes: String::new(),
      created_at: Utc::now(),
    }
  }

  #[tokio::test]
  async fn anonymous_dashboard_lands_on_login() {
    let (mut app, _dir) = app(None);
    app.navigate(Route::Dashboard).await;
    assert_eq!(app.screen, Screen::Login);
  }

  #[tokio::test]
  async fn anonymous_admin_lands_on_login_via_dashboard() {
    let (mut app, _dir) = app(None);
    app.navigate(Route::Admin).await;
    assert_eq!(app.screen, Screen::Login);
  }

  #[tokio::test]
  async fn non_admin_admin_attempt_lands_on_dashboard() {
    let (mut app, _dir) = app(Some(Role::User));
    app.navigate(Route::Admin).await;
    assert_eq!(app.screen, Screen::Dashboard);
    // The mount fetch failed against the dead endpoint; the error is
    // inline, not a crash.
    assert!(!app.dashboard.error.is_empty());
  }

  #[tokio::test]
  async fn authenticated_login_lands_on_dashboard() {
    let (mut app, _dir) = app(Some(Role::User));
    app.navigate(Route::Login).await;
    assert_eq!(app.screen, Screen::Dashboard);
  }

  #[tokio::test]
  async fn logout_clears_session_and_guard_sees_anonymous() {
    let (mut app, dir) = app(Some(Role::Admin));
    app.sessions
      .save(&Session {
        token:    "tok".into(),
        identity: identity(Role::Admin),
      })
      .unwrap();

    app.logout();
    assert!(app.identity.is_none());
    assert!(!app.client.has_token());
    assert!(!dir.path().join("token").exists());
    assert!(!dir.path().join("identity.json").exists());

    app.navigate(Route::Dashboard).await;
    assert_eq!(app.screen, Screen::Login);
  }

  #[tokio::test]
  async fn zero_quantity_is_rejected_before_any_request() {
    let (mut app, _dir) = app(Some(Role::User));
    app.supply.quantity.value = "0".into();
    app.submit_supply().await;
    assert_eq!(app.supply.error, "quantity must be at least 1");
    assert!(!app.supply.loading);
    // Values are preserved for a retry.
    assert_eq!(app.supply.quantity.value, "0");
  }

  #[tokio::test]
  async fn failed_submission_preserves_form_state() {
    let (mut app, _dir) = app(Some(Role::User));
    app.supply.quantity.value = "7".into();
    app.supply.price.value = "44".into();
    app.supply.recompute();
    app.submit_supply().await;
    // The dead endpoint rejects at the transport layer; the draft stays.
    assert!(!app.supply.error.is_empty());
    assert_eq!(app.supply.quantity.value, "7");
    assert_eq!(app.supply.price.value, "44");
  }

  #[test]
  fn dashboard_filter_is_pure_and_exact() {
    let state = DashboardState {
      supplies: vec![supply(SupplyStatus::Pending), supply(SupplyStatus::Paid)],
      filter: StatusFilter::Paid,
      ..DashboardState::default()
    };
    let filtered = state.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].status, SupplyStatus::Paid);
  }

  #[tokio::test]
  async fn password_mismatch_blocks_before_network() {
    let (mut app, _dir) = app(None);
    app.navigate(Route::Register).await;
    app.register.name.value = "Ada".into();
    app.register.email.value = "ada@example.com".into();
    app.register.password.value = "secret".into();
    app.register.confirm.value = "secrettypo".into();
    app.submit_register().await;
    assert_eq!(app.register.error, "Passwords do not match");
    assert!(!app.register.loading);
  }

  #[tokio::test]
  async fn navigating_to_supply_discards_the_preview() {
    let (mut app, _dir) = app(Some(Role::User));
    app.supply.quantity.value = "99".into();
    app.supply.recompute();
    app.navigate(Route::Supply).await;
    assert_eq!(app.supply.quantity.value, "1");
    assert_eq!(app.supply.bottle_size, BottleSize::L1);
  }
}
