//! Form state for the input screens.
//!
//! Each form owns its fields, its focus position and its inline
//! error/success banners. The forms are plain data; the [`crate::app`]
//! module drives them and the [`crate::ui`] module renders them.

use fam_core::{
  draft::{CashbackInfo, SupplyDraft, random_unit_price},
  supply::{BottleSize, SupplyStatus},
};

// ─── Text fields ─────────────────────────────────────────────────────────────

/// A single-line editable text field.
#[derive(Debug, Clone, Default)]
pub struct TextField {
  pub value:  String,
  /// Render as bullets (passwords).
  pub masked: bool,
}

impl TextField {
  pub fn masked() -> Self {
    Self {
      value:  String::new(),
      masked: true,
    }
  }

  pub fn push(&mut self, c: char) { self.value.push(c); }

  pub fn backspace(&mut self) { self.value.pop(); }

  pub fn is_empty(&self) -> bool { self.value.trim().is_empty() }
}

// ─── Login ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
  pub email:    TextField,
  pub password: TextField,
  pub focus:    usize,
  pub error:    String,
  pub loading:  bool,
}

impl LoginForm {
  pub fn new() -> Self {
    Self {
      password: TextField::masked(),
      ..Self::default()
    }
  }

  pub const FIELDS: usize = 2;

  pub fn focused_mut(&mut self) -> &mut TextField {
    match self.focus {
      0 => &mut self.email,
      _ => &mut self.password,
    }
  }
}

// ─── Register ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
  pub name:     TextField,
  pub email:    TextField,
  pub password: TextField,
  pub confirm:  TextField,
  pub focus:    usize,
  pub error:    String,
  pub loading:  bool,
}

impl RegisterForm {
  pub fn new() -> Self {
    Self {
      password: TextField::masked(),
      confirm: TextField::masked(),
      ..Self::default()
    }
  }

  pub const FIELDS: usize = 4;

  pub fn focused_mut(&mut self) -> &mut TextField {
    match self.focus {
      0 => &mut self.name,
      1 => &mut self.email,
      2 => &mut self.password,
      _ => &mut self.confirm,
    }
  }

  /// Local validation, run before any network call.
  pub fn validate(&self) -> Result<(), String> {
    if self.name.is_empty() || self.email.is_empty() || self.password.is_empty() {
      return Err("All fields are required".to_string());
    }
    if self.password.value != self.confirm.value {
      return Err("Passwords do not match".to_string());
    }
    Ok(())
  }
}

// ─── Contact ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
  pub name:    TextField,
  pub email:   TextField,
  pub subject: TextField,
  pub message: TextField,
  pub focus:   usize,
  pub error:   String,
  pub success: String,
  pub loading: bool,
}

impl ContactForm {
  pub const FIELDS: usize = 4;

  pub fn focused_mut(&mut self) -> &mut TextField {
    match self.focus {
      0 => &mut self.name,
      1 => &mut self.email,
      2 => &mut self.subject,
      _ => &mut self.message,
    }
  }

  pub fn validate(&self) -> Result<(), String> {
    if self.name.is_empty()
      || self.email.is_empty()
      || self.subject.is_empty()
      || self.message.is_empty()
    {
      return Err("All fields are required".to_string());
    }
    Ok(())
  }
}

// ─── Supply submission ───────────────────────────────────────────────────────

/// Focus positions on the supply form.
pub const SUPPLY_FOCUS_SIZE: usize = 0;
pub const SUPPLY_FOCUS_QUANTITY: usize = 1;
pub const SUPPLY_FOCUS_PRICE: usize = 2;
pub const SUPPLY_FIELDS: usize = 3;

/// The supply submission screen state: the draft under edit plus its
/// cashback figures and banners.
#[derive(Debug, Clone)]
pub struct SupplyForm {
  pub bottle_size: BottleSize,
  /// Raw digits under edit; parsed leniently (empty → 0) for the preview,
  /// strictly validated on submit.
  pub quantity:    TextField,
  pub price:       TextField,
  pub focus:       usize,
  pub error:       String,
  pub success:     String,
  pub loading:     bool,
  /// Current cashback figures shown in the summary pane.
  pub cashback:    CashbackInfo,
  /// True once `cashback` came back from the backend; cleared as soon as
  /// the user edits any field, which reverts to the live estimate.
  pub final_figures: bool,
}

impl SupplyForm {
  /// A fresh form: the post-reset defaults (1L, one unit, random price).
  pub fn new() -> Self {
    let draft = SupplyDraft::default();
    let mut form = Self {
      bottle_size:   draft.bottle_size,
      quantity:      TextField::default(),
      price:         TextField::default(),
      focus:         SUPPLY_FOCUS_SIZE,
      error:         String::new(),
      success:       String::new(),
      loading:       false,
      cashback:      draft.preview(),
      final_figures: false,
    };
    form.quantity.value = draft.quantity.to_string();
    form.price.value = draft.price_per_unit.to_string();
    form
  }

  /// Parse the current fields into a draft. Unparsable numbers become 0,
  /// which `SupplyDraft::validate` then rejects — mirroring the lenient
  /// input handling of the hosted form.
  pub fn draft(&self) -> SupplyDraft {
    SupplyDraft {
      bottle_size:    self.bottle_size,
      quantity:       self.quantity.value.trim().parse().unwrap_or(0),
      price_per_unit: self.price.value.trim().parse().unwrap_or(0),
    }
  }

  /// Recompute the ephemeral preview. Called after every edit; drops any
  /// authoritative figures, which only apply to the submitted order.
  pub fn recompute(&mut self) {
    self.cashback = self.draft().preview();
    self.final_figures = false;
  }

  /// Change the bottle size and reseed the price field, leaving the
  /// quantity untouched.
  pub fn change_size(&mut self, size: BottleSize) {
    self.bottle_size = size;
    self.price.value = random_unit_price().to_string();
    self.recompute();
  }

  /// Reset to defaults after a successful submission, keeping the
  /// success banner and the authoritative figures for display.
  pub fn reset_after_success(&mut self, success: String, figures: Option<CashbackInfo>) {
    let fresh = Self::new();
    self.bottle_size = fresh.bottle_size;
    self.quantity = fresh.quantity;
    self.price = fresh.price;
    self.focus = SUPPLY_FOCUS_SIZE;
    self.error.clear();
    self.success = success;
    match figures {
      Some(figures) => {
        self.cashback = figures;
        self.final_figures = true;
      }
      None => self.recompute(),
    }
  }
}

// ─── Admin edit context ──────────────────────────────────────────────────────

/// The status-edit dialog an administrator opens on a supply, seeded with
/// the record's current status and notes.
#[derive(Debug, Clone)]
pub struct EditContext {
  pub supply_id: String,
  pub status:    SupplyStatus,
  pub notes:     TextField,
}

impl EditContext {
  pub fn seeded(supply_id: String, status: SupplyStatus, notes: String) -> Self {
    Self {
      supply_id,
      status,
      notes: TextField {
        value:  notes,
        masked: false,
      },
    }
  }
}
