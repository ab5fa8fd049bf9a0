//! Supplier dashboard — summary cards and the transaction history table.

use fam_core::supply::Supply;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::{
  app::App,
  ui::{error_line, naira, status_span},
};

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  if app.dashboard.loading {
    f.render_widget(Paragraph::new("Loading your dashboard…"), area);
    return;
  }

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(3), // greeting
      Constraint::Length(4), // stat cards
      Constraint::Min(0),    // transactions
    ])
    .split(area);

  draw_greeting(f, rows[0], app);
  draw_stats(f, rows[1], app);
  draw_transactions(f, rows[2], app);
}

fn draw_greeting(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let (name, returning) = match &app.identity {
    Some(identity) => (identity.name.as_str(), identity.is_returning),
    None => ("supplier", false),
  };
  let badge = if returning {
    Span::styled("Returning Customer", Style::default().fg(Color::Green))
  } else {
    Span::styled("New Customer", Style::default().fg(Color::Gray))
  };
  let line = Line::from(vec![
    Span::styled(
      format!("Welcome back, {name}!  "),
      Style::default().add_modifier(Modifier::BOLD),
    ),
    badge,
  ]);
  f.render_widget(Paragraph::new(line), inner);
}

fn draw_stats(f: &mut Frame, area: Rect, app: &App) {
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([
      Constraint::Percentage(25),
      Constraint::Percentage(25),
      Constraint::Percentage(25),
      Constraint::Percentage(25),
    ])
    .split(area);

  let summary = &app.dashboard.summary;
  let reward = match &app.identity {
    Some(identity) if identity.is_returning => "10%",
    _ => "0%",
  };
  let cards = [
    ("Total Supplies", summary.total_supplies.to_string()),
    ("Total Revenue", naira(summary.total_amount)),
    ("Total Cashback", naira(summary.total_cashback)),
    ("Reward Status", reward.to_string()),
  ];

  for (i, (title, value)) in cards.iter().enumerate() {
    let block = Block::default()
      .title(format!(" {title} "))
      .borders(Borders::ALL)
      .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(cols[i]);
    f.render_widget(block, cols[i]);
    f.render_widget(
      Paragraph::new(Line::from(Span::styled(
        value.clone(),
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      ))),
      inner,
    );
  }
}

fn draw_transactions(f: &mut Frame, area: Rect, app: &App) {
  let filtered = app.dashboard.filtered();
  let title = format!(
    " Transaction History — filter: {} ({}) ",
    app.dashboard.filter.label(),
    filtered.len()
  );
  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut lines = Vec::new();
  if !app.dashboard.error.is_empty() {
    lines.push(error_line(&app.dashboard.error));
    lines.push(Line::from(""));
  }

  if filtered.is_empty() {
    lines.push(Line::styled(
      "No supplies yet. Press [s] to submit a supply!",
      Style::default().fg(Color::DarkGray),
    ));
  } else {
    lines.push(header_row());
    for supply in filtered {
      lines.push(supply_row(supply));
    }
  }

  f.render_widget(Paragraph::new(lines), inner);
}

fn header_row() -> Line<'static> {
  Line::from(Span::styled(
    format!(
      "{:<12} {:<8} {:>8} {:>12} {:>12}  {:<8}",
      "Date", "Size", "Qty", "Total", "Cashback", "Status"
    ),
    Style::default()
      .fg(Color::Gray)
      .add_modifier(Modifier::BOLD),
  ))
}

fn supply_row(supply: &Supply) -> Line<'static> {
  Line::from(vec![
    Span::raw(format!(
      "{:<12} {:<8} {:>8} {:>12} {:>12}  ",
      supply.created_at.format("%Y-%m-%d"),
      supply.bottle_size.as_str(),
      supply.quantity,
      naira(supply.total_amount),
      naira(supply.cashback),
    )),
    status_span(supply.status),
  ])
}
