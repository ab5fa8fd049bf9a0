//! TUI rendering — orchestrates all screens.

pub mod admin;
pub mod auth;
pub mod contact;
pub mod dashboard;
pub mod info;
pub mod supply;

use fam_core::supply::SupplyStatus;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};

use crate::{app::{App, Screen}, forms::TextField};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: header, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0], app);
  draw_body(f, rows[1], app);
  draw_status(f, rows[2], app);
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
  let left = Span::styled(
    " FAM Bottling Co",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );

  let who = match &app.identity {
    Some(identity) if identity.is_admin() => format!("{} (admin) ", identity.name),
    Some(identity) => format!("{} ", identity.name),
    None => "not signed in ".to_string(),
  };
  let right = Span::styled(who, Style::default().fg(Color::Gray));

  let left_width = left.content.len() as u16;
  let right_width = right.content.len() as u16;
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let line = Line::from(vec![left, Span::raw(" ".repeat(pad as usize)), right]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
  match app.screen {
    Screen::Landing => info::draw_landing(f, area),
    Screen::Founders => info::draw_founders(f, area),
    Screen::Contact => contact::draw(f, area, app),
    Screen::Login => auth::draw_login(f, area, app),
    Screen::Register => auth::draw_register(f, area, app),
    Screen::Supply => supply::draw(f, area, app),
    Screen::Dashboard => dashboard::draw(f, area, app),
    Screen::Admin => admin::draw(f, area, app),
  }
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = match app.screen {
    Screen::Landing => (
      "HOME",
      "[l] login  [r] register  [s] supply  [d] dashboard  [m] founders  [c] contact  [q] quit",
    ),
    Screen::Founders => ("ABOUT", "Esc back  [c] contact  [q] quit"),
    Screen::Contact => ("CONTACT", "Tab next field  Enter send  Esc back"),
    Screen::Login => ("LOGIN", "Tab next field  Enter sign in  Esc back"),
    Screen::Register => ("REGISTER", "Tab next field  Enter create account  Esc back"),
    Screen::Supply => (
      "SUPPLY",
      "Tab field  ←→ bottle size  Enter submit  Esc dashboard",
    ),
    Screen::Dashboard => (
      "DASHBOARD",
      "[f] filter  [g] refresh  [s] new supply  [a] admin  [o] logout  [q] quit",
    ),
    Screen::Admin => {
      if app.admin.edit.is_some() {
        ("EDIT", "←→ status  type notes  Enter save  Esc cancel")
      } else {
        ("ADMIN", "jk move  [e] edit  [t] toggle returning  [g] refresh  [o] logout")
      }
    }
  };

  let status = if app.status_msg.is_empty() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(
    format!("  {status}"),
    Style::default().fg(Color::DarkGray),
  );

  let line = Line::from(vec![mode_span, hint_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}

// ─── Shared pieces ────────────────────────────────────────────────────────────

/// One labelled form field; the focused field gets a cursor and highlight.
pub(crate) fn field_line(label: &str, field: &TextField, focused: bool) -> Line<'static> {
  let shown = if field.masked {
    "•".repeat(field.value.chars().count())
  } else {
    field.value.clone()
  };
  let value = if focused {
    format!("{shown}_")
  } else {
    shown
  };
  let value_style = if focused {
    Style::default().fg(Color::Yellow)
  } else {
    Style::default()
  };
  Line::from(vec![
    Span::styled(
      format!("{label:>16}: "),
      Style::default().fg(Color::Gray),
    ),
    Span::styled(value, value_style),
  ])
}

pub(crate) fn error_line(msg: &str) -> Line<'static> {
  Line::from(Span::styled(
    format!("✗ {msg}"),
    Style::default().fg(Color::Red),
  ))
}

pub(crate) fn success_line(msg: &str) -> Line<'static> {
  Line::from(Span::styled(
    format!("✓ {msg}"),
    Style::default().fg(Color::Green),
  ))
}

/// Status badge colors, matching the hosted dashboard palette.
pub(crate) fn status_color(status: SupplyStatus) -> Color {
  match status {
    SupplyStatus::Pending => Color::Yellow,
    SupplyStatus::Approved => Color::Green,
    SupplyStatus::Paid => Color::Blue,
    SupplyStatus::Rejected => Color::Red,
  }
}

pub(crate) fn status_span(status: SupplyStatus) -> Span<'static> {
  Span::styled(
    format!("{:<8}", status.as_str()),
    Style::default().fg(status_color(status)),
  )
}

/// Format an amount in Naira, two decimals.
pub(crate) fn naira(amount: f64) -> String { format!("₦{amount:.2}") }

/// A centered sub-rectangle, used for the admin edit dialog.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
  let w = width.min(area.width);
  let h = height.min(area.height);
  Rect {
    x: area.x + (area.width - w) / 2,
    y: area.y + (area.height - h) / 2,
    width: w,
    height: h,
  }
}
