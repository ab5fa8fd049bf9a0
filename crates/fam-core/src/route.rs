//! The route guard — navigation-time authorization.
//!
//! The guard is a pure function of (identity role, requested route),
//! evaluated fresh on every navigation. A redirect triggers a new
//! navigation, which is guarded again; nothing is persisted.

use crate::identity::Role;

// ─── Routes ──────────────────────────────────────────────────────────────────

/// Every view the client can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
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

impl Route {
  /// Parse a path into a route. `None` means an unrecognised path, which
  /// the guard redirects to the landing page.
  pub fn parse(path: &str) -> Option<Route> {
    match path {
      "/" => Some(Route::Landing),
      "/meet-founders" => Some(Route::Founders),
      "/contact" => Some(Route::Contact),
      "/login" => Some(Route::Login),
      "/register" => Some(Route::Register),
      "/supply" => Some(Route::Supply),
      "/dashboard" => Some(Route::Dashboard),
      "/admin" => Some(Route::Admin),
      _ => None,
    }
  }

  pub fn path(&self) -> &'static str {
    match self {
      Route::Landing => "/",
      Route::Founders => "/meet-founders",
      Route::Contact => "/contact",
      Route::Login => "/login",
      Route::Register => "/register",
      Route::Supply => "/supply",
      Route::Dashboard => "/dashboard",
      Route::Admin => "/admin",
    }
  }
}

// ─── Guard ───────────────────────────────────────────────────────────────────

/// Outcome of a single guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
  Allow,
  Redirect(Route),
}

/// Evaluate the guard for one navigation step.
///
/// Rules, in order:
/// 1. Landing, founders and contact are public.
/// 2. Login and register are only reachable logged-out; otherwise the
///    destination is the dashboard.
/// 3. Supply and dashboard need any identity; otherwise login.
/// 4. Admin needs the admin role; everyone else — including anonymous
///    visitors — is sent to the dashboard. The anonymous case falling
///    through to the dashboard (not login) mirrors the upstream router's
///    rule ordering and is kept deliberately; the follow-up evaluation of
///    the dashboard route lands anonymous visitors on login anyway.
/// 5. Anything unrecognised goes to the landing page.
pub fn resolve(role: Option<Role>, requested: Option<Route>) -> Access {
  let Some(route) = requested else {
    return Access::Redirect(Route::Landing);
  };

  match route {
    Route::Landing | Route::Founders | Route::Contact => Access::Allow,

    Route::Login | Route::Register => match role {
      Some(_) => Access::Redirect(Route::Dashboard),
      None => Access::Allow,
    },

    Route::Supply | Route::Dashboard => match role {
      Some(_) => Access::Allow,
      None => Access::Redirect(Route::Login),
    },

    Route::Admin => match role {
      Some(Role::Admin) => Access::Allow,
      _ => Access::Redirect(Route::Dashboard),
    },
  }
}

/// Follow redirects until a route is allowed.
///
/// Every redirect target is itself guarded, exactly as a router re-evaluates
/// after a redirect. The chain is short (at most two hops in practice); the
/// bound is a safety net, with the always-public landing page as fallback.
pub fn settle(role: Option<Role>, requested: Option<Route>) -> Route {
  let mut current = requested;
  for _ in 0..4 {
    match resolve(role, current) {
      Access::Allow => return current.unwrap_or_default(),
      Access::Redirect(next) => current = Some(next),
    }
  }
  Route::Landing
}
