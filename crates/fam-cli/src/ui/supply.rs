//! Supply submission screen — the form and the live order summary.

use fam_core::draft::{MAX_UNIT_PRICE, MIN_UNIT_PRICE};
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
  app::App,
  forms::{SUPPLY_FOCUS_PRICE, SUPPLY_FOCUS_QUANTITY, SUPPLY_FOCUS_SIZE},
  ui::{error_line, field_line, naira, success_line},
};

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
    .split(area);

  draw_form(f, cols[0], app);
  draw_summary(f, cols[1], app);
}

// ─── Form ─────────────────────────────────────────────────────────────────────

fn draw_form(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(" Supply Submission Form ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let form = &app.supply;
  let mut lines =
    vec![Line::from("Fill out the details below to submit your bottle supply.")];
  lines.push(Line::from(""));
  if !form.error.is_empty() {
    lines.push(error_line(&form.error));
    lines.push(Line::from(""));
  }
  if !form.success.is_empty() {
    lines.push(success_line(&form.success));
    lines.push(Line::from(""));
  }

  // Bottle size selector.
  let size_focused = form.focus == SUPPLY_FOCUS_SIZE;
  let size_style = if size_focused {
    Style::default().fg(Color::Yellow)
  } else {
    Style::default()
  };
  lines.push(Line::from(vec![
    Span::styled(
      format!("{:>16}: ", "Bottle size"),
      Style::default().fg(Color::Gray),
    ),
    Span::styled(format!("◂ {} ▸", form.bottle_size), size_style),
  ]));

  lines.push(field_line(
    "Quantity (units)",
    &form.quantity,
    form.focus == SUPPLY_FOCUS_QUANTITY,
  ));
  lines.push(field_line(
    "Price per unit ₦",
    &form.price,
    form.focus == SUPPLY_FOCUS_PRICE,
  ));
  lines.push(Line::from(Span::styled(
    format!(
      "{:>18}prices range ₦{MIN_UNIT_PRICE} - ₦{MAX_UNIT_PRICE} (default generated)",
      ""
    ),
    Style::default().fg(Color::DarkGray),
  )));
  lines.push(Line::from(""));
  lines.push(Line::from(if form.loading {
    "Submitting…"
  } else {
    "Press Enter to submit."
  }));

  f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

// ─── Order summary ────────────────────────────────────────────────────────────

fn draw_summary(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(" Order Summary ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let form = &app.supply;
  let draft = form.draft();
  let label = Style::default().fg(Color::Gray);

  let mut lines = vec![
    Line::from(vec![
      Span::styled(format!("{:>16}: ", "Bottle size"), label),
      Span::raw(draft.bottle_size.to_string()),
    ]),
    Line::from(vec![
      Span::styled(format!("{:>16}: ", "Quantity"), label),
      Span::raw(format!("{} units", draft.quantity)),
    ]),
    Line::from(vec![
      Span::styled(format!("{:>16}: ", "Price per unit"), label),
      Span::raw(format!("₦{}", draft.price_per_unit)),
    ]),
    Line::from(vec![
      Span::styled(format!("{:>16}: ", "Total amount"), label),
      Span::styled(
        naira(form.cashback.total_amount),
        Style::default().add_modifier(Modifier::BOLD),
      ),
    ]),
    Line::from(""),
  ];

  // Cashback section: estimate until the backend has spoken.
  if form.final_figures {
    lines.push(Line::styled(
      "Cashback (confirmed by FAM)",
      Style::default().fg(Color::Cyan),
    ));
    lines.push(Line::from(vec![
      Span::styled(format!("{:>16}: ", "Cashback"), label),
      Span::styled(
        naira(form.cashback.estimated_cashback),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
      ),
    ]));
  } else {
    lines.push(Line::styled(
      "Cashback info",
      Style::default().fg(Color::Cyan),
    ));
    lines.push(Line::from(vec![
      Span::styled(format!("{:>16}: ", "Est. cashback"), label),
      Span::styled(
        naira(form.cashback.estimated_cashback),
        Style::default().fg(Color::Green),
      ),
    ]));
    lines.push(Line::styled(
      "  Estimated at 10%, if returning customer — never guaranteed.",
      Style::default().fg(Color::DarkGray),
    ));
    lines.push(Line::styled(
      "  The final amount is shown after submission.",
      Style::default().fg(Color::DarkGray),
    ));
  }

  f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
