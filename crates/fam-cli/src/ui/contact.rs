//! Contact screen — the message form plus the static contact details.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Style},
  text::Line,
  widgets::{Block, Borders, Paragraph},
};

use crate::{
  app::App,
  ui::{error_line, field_line, success_line},
};

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
    .split(area);

  draw_form(f, cols[0], app);
  draw_details(f, cols[1]);
}

fn draw_form(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(" Get In Touch ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let form = &app.contact;
  let mut lines = vec![Line::from("We'd love to hear from you. Send us a message!")];
  lines.push(Line::from(""));
  if !form.error.is_empty() {
    lines.push(error_line(&form.error));
  }
  if !form.success.is_empty() {
    lines.push(success_line(&form.success));
  }
  if !form.error.is_empty() || !form.success.is_empty() {
    lines.push(Line::from(""));
  }
  lines.push(field_line("Name", &form.name, form.focus == 0));
  lines.push(field_line("Email", &form.email, form.focus == 1));
  lines.push(field_line("Subject", &form.subject, form.focus == 2));
  lines.push(field_line("Message", &form.message, form.focus == 3));
  lines.push(Line::from(""));
  lines.push(Line::from(if form.loading {
    "Sending…"
  } else {
    "Press Enter to send."
  }));

  f.render_widget(Paragraph::new(lines), inner);
}

fn draw_details(f: &mut Frame, area: Rect) {
  let block = Block::default()
    .title(" Contact Information ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let dim = Style::default().fg(Color::Gray);
  let lines = vec![
    Line::styled("Business hours", Style::default().fg(Color::Cyan)),
    Line::styled("  Monday - Friday: 9:00 AM - 5:00 PM", dim),
    Line::styled("  Saturday: 10:00 AM - 3:00 PM", dim),
    Line::styled("  Sunday: Closed", dim),
  ];
  f.render_widget(Paragraph::new(lines), inner);
}
