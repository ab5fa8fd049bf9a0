//! Unit tests for the guard, the draft workflow and the wire formats.

use crate::{
  Error,
  draft::{CASHBACK_RATE, MAX_UNIT_PRICE, MIN_UNIT_PRICE, SupplyDraft},
  identity::{Identity, Role},
  route::{Access, Route, resolve, settle},
  supply::{BottleSize, StatusFilter, Supply, SupplyStatus, SupplyWithOwner, Summary},
};

// ─── Route guard ─────────────────────────────────────────────────────────────

#[test]
fn public_routes_always_allowed() {
  for role in [None, Some(Role::User), Some(Role::Admin)] {
    for route in [Route::Landing, Route::Founders, Route::Contact] {
      assert_eq!(resolve(role, Some(route)), Access::Allow);
    }
  }
}

#[test]
fn anonymous_dashboard_redirects_to_login() {
  assert_eq!(
    resolve(None, Some(Route::Dashboard)),
    Access::Redirect(Route::Login)
  );
  assert_eq!(
    resolve(None, Some(Route::Supply)),
    Access::Redirect(Route::Login)
  );
}

#[test]
fn authenticated_login_redirects_to_dashboard() {
  for role in [Role::User, Role::Admin] {
    assert_eq!(
      resolve(Some(role), Some(Route::Login)),
      Access::Redirect(Route::Dashboard)
    );
    assert_eq!(
      resolve(Some(role), Some(Route::Register)),
      Access::Redirect(Route::Dashboard)
    );
  }
}

#[test]
fn admin_route_allowed_for_admin_only() {
  assert_eq!(resolve(Some(Role::Admin), Some(Route::Admin)), Access::Allow);
  assert_eq!(
    resolve(Some(Role::User), Some(Route::Admin)),
    Access::Redirect(Route::Dashboard)
  );
  // Anonymous visitors fall through to the dashboard, not login — kept
  // from the upstream router's rule ordering.
  assert_eq!(
    resolve(None, Some(Route::Admin)),
    Access::Redirect(Route::Dashboard)
  );
}

#[test]
fn unknown_path_redirects_to_landing() {
  assert_eq!(Route::parse("/nope"), None);
  assert_eq!(resolve(None, None), Access::Redirect(Route::Landing));
  assert_eq!(
    resolve(Some(Role::Admin), None),
    Access::Redirect(Route::Landing)
  );
}

#[test]
fn settle_follows_redirect_chains() {
  // Anonymous /admin: admin → dashboard → login.
  assert_eq!(settle(None, Some(Route::Admin)), Route::Login);
  // Non-admin /admin settles on the dashboard.
  assert_eq!(settle(Some(Role::User), Some(Route::Admin)), Route::Dashboard);
  // Logged-in /login settles on the dashboard.
  assert_eq!(settle(Some(Role::User), Some(Route::Login)), Route::Dashboard);
  // Unknown path settles on the landing page.
  assert_eq!(settle(None, None), Route::Landing);
  // Allowed routes settle on themselves.
  assert_eq!(settle(Some(Role::Admin), Some(Route::Admin)), Route::Admin);
}

#[test]
fn route_paths_round_trip() {
  for route in [
    Route::Landing,
    Route::Founders,
    Route::Contact,
    Route::Login,
    Route::Register,
    Route::Supply,
    Route::Dashboard,
    Route::Admin,
  ] {
    assert_eq!(Route::parse(route.path()), Some(route));
  }
}

// ─── Draft & cashback preview ────────────────────────────────────────────────

#[test]
fn preview_is_deterministic_and_rounded() {
  let draft = SupplyDraft {
    bottle_size:    BottleSize::L1,
    quantity:       7,
    price_per_unit: 43,
  };
  let preview = draft.preview();
  assert_eq!(preview.total_amount, 301.0);
  assert_eq!(preview.estimated_cashback, 30.0); // round(30.1)
  // Same inputs, same preview.
  assert_eq!(draft.preview(), preview);
}

#[test]
fn preview_matches_rate_across_bounds() {
  for quantity in [1_u32, 2, 9, 100] {
    for price in MIN_UNIT_PRICE..=MAX_UNIT_PRICE {
      let draft = SupplyDraft {
        bottle_size: BottleSize::Cl50,
        quantity,
        price_per_unit: price,
      };
      let expected =
        (f64::from(quantity) * f64::from(price) * CASHBACK_RATE).round();
      assert_eq!(draft.preview().estimated_cashback, expected);
    }
  }
}

#[test]
fn size_change_reseeds_price_within_bounds() {
  let mut draft = SupplyDraft {
    bottle_size:    BottleSize::L1,
    quantity:       4,
    price_per_unit: 50,
  };
  for _ in 0..100 {
    draft.set_bottle_size(draft.bottle_size.next());
    assert!((MIN_UNIT_PRICE..=MAX_UNIT_PRICE).contains(&draft.price_per_unit));
    assert_eq!(draft.quantity, 4);
  }
}

#[test]
fn default_draft_is_reset_state() {
  for _ in 0..50 {
    let draft = SupplyDraft::default();
    assert_eq!(draft.bottle_size, BottleSize::L1);
    assert_eq!(draft.quantity, 1);
    assert!((MIN_UNIT_PRICE..=MAX_UNIT_PRICE).contains(&draft.price_per_unit));
  }
}

#[test]
fn zero_quantity_is_rejected() {
  let draft = SupplyDraft {
    bottle_size:    BottleSize::Cl30,
    quantity:       0,
    price_per_unit: 40,
  };
  assert_eq!(draft.validate(), Err(Error::ZeroQuantity));
}

#[test]
fn out_of_range_price_is_rejected() {
  let mut draft = SupplyDraft {
    bottle_size:    BottleSize::Cl30,
    quantity:       1,
    price_per_unit: MAX_UNIT_PRICE + 1,
  };
  assert_eq!(
    draft.validate(),
    Err(Error::PriceOutOfRange(MAX_UNIT_PRICE + 1))
  );
  draft.price_per_unit = MIN_UNIT_PRICE - 1;
  assert!(draft.validate().is_err());
  draft.price_per_unit = MIN_UNIT_PRICE;
  assert!(draft.validate().is_ok());
}

// ─── Status filter ───────────────────────────────────────────────────────────

#[test]
fn filter_selects_exactly_matching_records() {
  let statuses = [SupplyStatus::Pending, SupplyStatus::Paid];
  let paid: Vec<_> = statuses
    .iter()
    .filter(|s| StatusFilter::Paid.matches(**s))
    .collect();
  assert_eq!(paid, vec![&SupplyStatus::Paid]);

  let all: Vec<_> = statuses
    .iter()
    .filter(|s| StatusFilter::All.matches(**s))
    .collect();
  assert_eq!(all.len(), 2);
}

#[test]
fn filter_cycle_wraps() {
  let mut filter = StatusFilter::All;
  let mut seen = Vec::new();
  for _ in 0..4 {
    seen.push(filter);
    filter = filter.next();
  }
  assert_eq!(filter, StatusFilter::All);
  assert_eq!(seen.len(), 4);
}

#[test]
fn rejected_never_matches_a_named_filter() {
  assert!(!StatusFilter::Pending.matches(SupplyStatus::Rejected));
  assert!(!StatusFilter::Approved.matches(SupplyStatus::Rejected));
  assert!(!StatusFilter::Paid.matches(SupplyStatus::Rejected));
  assert!(StatusFilter::All.matches(SupplyStatus::Rejected));
}

// ─── Wire formats ────────────────────────────────────────────────────────────

#[test]
fn identity_deserialises_from_backend_shape() {
  let raw = r#"{
    "_id": "64f1c0ffee",
    "name": "Ada Obi",
    "email": "ada@example.com",
    "role": "admin",
    "isReturning": true
  }"#;
  let identity: Identity = serde_json::from_str(raw).unwrap();
  assert_eq!(identity.id, "64f1c0ffee");
  assert_eq!(identity.role, Role::Admin);
  assert!(identity.is_returning);
  assert!(identity.is_admin());
}

#[test]
fn identity_is_returning_defaults_to_false() {
  let raw = r#"{"_id":"x","name":"N","email":"e@x","role":"user"}"#;
  let identity: Identity = serde_json::from_str(raw).unwrap();
  assert!(!identity.is_returning);
}

#[test]
fn supply_deserialises_from_backend_shape() {
  let raw = r#"{
    "_id": "abc123",
    "bottleSize": "1.5L",
    "quantity": 12,
    "pricePerUnit": 40,
    "totalAmount": 480,
    "cashback": 48,
    "status": "approved",
    "notes": "good batch",
    "createdAt": "2024-03-05T12:30:00Z"
  }"#;
  let supply: Supply = serde_json::from_str(raw).unwrap();
  assert_eq!(supply.bottle_size, BottleSize::L1_5);
  assert_eq!(supply.status, SupplyStatus::Approved);
  assert_eq!(supply.total_amount, supply.quantity as f64 * supply.price_per_unit);
}

#[test]
fn admin_supply_embeds_owner() {
  let raw = r#"{
    "_id": "abc123",
    "bottleSize": "30cl",
    "quantity": 3,
    "pricePerUnit": 35,
    "totalAmount": 105,
    "cashback": 0,
    "status": "pending",
    "notes": "",
    "createdAt": "2024-03-05T12:30:00Z",
    "userId": {
      "_id": "u1",
      "name": "Ada Obi",
      "email": "ada@example.com",
      "role": "user",
      "isReturning": false
    }
  }"#;
  let record: SupplyWithOwner = serde_json::from_str(raw).unwrap();
  assert_eq!(record.supply.id, "abc123");
  assert_eq!(record.owner.id, "u1");
  assert_eq!(record.owner.role, Role::User);
}

#[test]
fn summary_deserialises_from_backend_shape() {
  let raw = r#"{"totalSupplies": 5, "totalAmount": 1200.5, "totalCashback": 120}"#;
  let summary: Summary = serde_json::from_str(raw).unwrap();
  assert_eq!(summary.total_supplies, 5);
  assert_eq!(summary.total_amount, 1200.5);
}

#[test]
fn bottle_size_strings_round_trip() {
  for size in BottleSize::ALL {
    assert_eq!(size.as_str().parse::<BottleSize>().unwrap(), size);
    let json = serde_json::to_string(&size).unwrap();
    assert_eq!(json, format!("\"{}\"", size.as_str()));
  }
}

#[test]
fn bottle_size_cycle_is_closed() {
  let mut size = BottleSize::L1;
  for _ in 0..BottleSize::ALL.len() {
    size = size.next();
  }
  assert_eq!(size, BottleSize::L1);
  assert_eq!(BottleSize::L1.next().prev(), BottleSize::L1);
}
