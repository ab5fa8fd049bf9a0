//! Admin review screen — platform overview, all supplies, edit dialog.

use fam_core::supply::{SupplyStatus, SupplyWithOwner};
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{
  app::App,
  forms::EditContext,
  ui::{centered_rect, error_line, naira, status_span},
};

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  if app.admin.loading {
    f.render_widget(Paragraph::new("Loading admin panel…"), area);
    return;
  }

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(4), // overview
      Constraint::Min(0),    // supplies
    ])
    .split(area);

  draw_overview(f, rows[0], app);
  draw_supplies(f, rows[1], app);

  if let Some(edit) = &app.admin.edit {
    draw_edit_dialog(f, area, edit);
  }
  if let Some(alert) = &app.admin.alert {
    draw_alert(f, area, alert);
  }
}

// ─── Overview ─────────────────────────────────────────────────────────────────

fn draw_overview(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(" Platform Overview ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let supplies = &app.admin.supplies;
  let pending = supplies
    .iter()
    .filter(|s| s.supply.status == SupplyStatus::Pending)
    .count();
  let approved = supplies
    .iter()
    .filter(|s| s.supply.status == SupplyStatus::Approved)
    .count();
  let revenue: f64 = supplies.iter().map(|s| s.supply.total_amount).sum();

  let value = Style::default()
    .fg(Color::Cyan)
    .add_modifier(Modifier::BOLD);
  let label = Style::default().fg(Color::Gray);
  let lines = vec![
    Line::from(vec![
      Span::styled("Total supplies: ", label),
      Span::styled(supplies.len().to_string(), value),
      Span::styled("   Pending approval: ", label),
      Span::styled(pending.to_string(), value),
      Span::styled("   Approved: ", label),
      Span::styled(approved.to_string(), value),
      Span::styled("   Total revenue: ", label),
      Span::styled(naira(revenue), value),
    ]),
  ];
  f.render_widget(Paragraph::new(lines), inner);
}

// ─── Supplies list ────────────────────────────────────────────────────────────

fn draw_supplies(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(format!(" All Supplies ({}) ", app.admin.supplies.len()))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut lines = Vec::new();
  if !app.admin.error.is_empty() {
    lines.push(error_line(&app.admin.error));
    lines.push(Line::from(""));
  }

  if app.admin.supplies.is_empty() {
    lines.push(Line::styled(
      "No supplies on the platform yet.",
      Style::default().fg(Color::DarkGray),
    ));
  } else {
    lines.push(Line::from(Span::styled(
      format!(
        "{:<20} {:<24} {:<6} {:>6} {:>12} {:>10}  {:<8} {}",
        "Supplier", "Email", "Size", "Qty", "Total", "Cashback", "Status", "Returning"
      ),
      Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::BOLD),
    )));
    for (i, record) in app.admin.supplies.iter().enumerate() {
      lines.push(supply_row(record, i == app.admin.cursor));
    }
  }

  f.render_widget(Paragraph::new(lines), inner);
}

fn supply_row(record: &SupplyWithOwner, selected: bool) -> Line<'static> {
  let base = if selected {
    Style::default()
      .bg(Color::Blue)
      .fg(Color::White)
      .add_modifier(Modifier::BOLD)
  } else {
    Style::default()
  };
  let returning = if record.owner.is_returning { "yes" } else { "no" };

  let mut spans = vec![Span::styled(
    format!(
      "{:<20} {:<24} {:<6} {:>6} {:>12} {:>10}  ",
      record.owner.name,
      record.owner.email,
      record.supply.bottle_size.as_str(),
      record.supply.quantity,
      naira(record.supply.total_amount),
      naira(record.supply.cashback),
    ),
    base,
  )];
  if selected {
    spans.push(Span::styled(
      format!("{:<8}", record.supply.status.as_str()),
      base,
    ));
  } else {
    spans.push(status_span(record.supply.status));
  }
  spans.push(Span::styled(format!(" {returning}"), base));
  Line::from(spans)
}

// ─── Edit dialog ──────────────────────────────────────────────────────────────

fn draw_edit_dialog(f: &mut Frame, area: Rect, edit: &EditContext) {
  let dialog = centered_rect(area, 52, 8);
  f.render_widget(Clear, dialog);

  let block = Block::default()
    .title(" Update Supply Status ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Cyan));
  let inner = block.inner(dialog);
  f.render_widget(block, dialog);

  let label = Style::default().fg(Color::Gray);
  let lines = vec![
    Line::from(vec![
      Span::styled("Status: ", label),
      Span::styled(
        format!("◂ {} ▸", edit.status),
        Style::default().fg(Color::Yellow),
      ),
    ]),
    Line::from(vec![
      Span::styled("Notes:  ", label),
      Span::styled(
        format!("{}_", edit.notes.value),
        Style::default().fg(Color::Yellow),
      ),
    ]),
    Line::from(""),
    Line::styled(
      "Enter save   Esc cancel",
      Style::default().fg(Color::DarkGray),
    ),
  ];
  f.render_widget(Paragraph::new(lines), inner);
}

// ─── Alert ────────────────────────────────────────────────────────────────────

/// Blocking alert for failed secondary actions; any key dismisses it.
fn draw_alert(f: &mut Frame, area: Rect, alert: &str) {
  let width = (alert.len() as u16 + 6).clamp(24, area.width);
  let dialog = centered_rect(area, width, 5);
  f.render_widget(Clear, dialog);

  let block = Block::default()
    .title(" Error ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Red));
  let inner = block.inner(dialog);
  f.render_widget(block, dialog);

  let lines = vec![
    Line::from(alert.to_string()),
    Line::styled(
      "press any key",
      Style::default().fg(Color::DarkGray),
    ),
  ];
  f.render_widget(Paragraph::new(lines), inner);
}
