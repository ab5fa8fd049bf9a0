//! Login and register screens.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Style},
  text::Line,
  widgets::{Block, Borders, Paragraph},
};

use crate::{
  app::App,
  ui::{error_line, field_line},
};

pub fn draw_login(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(" Login to FAM Bottling Co ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let form = &app.login;
  let mut lines = Vec::new();
  if !form.error.is_empty() {
    lines.push(error_line(&form.error));
    lines.push(Line::from(""));
  }
  lines.push(field_line("Email", &form.email, form.focus == 0));
  lines.push(field_line("Password", &form.password, form.focus == 1));
  lines.push(Line::from(""));
  lines.push(Line::from(if form.loading {
    "Logging in…"
  } else {
    "Press Enter to sign in."
  }));
  lines.push(Line::from(""));
  lines.push(Line::from("Don't have an account? Press Esc, then [r] to register."));

  f.render_widget(Paragraph::new(lines), inner);
}

pub fn draw_register(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(" Register with FAM Bottling Co ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let form = &app.register;
  let mut lines = Vec::new();
  if !form.error.is_empty() {
    lines.push(error_line(&form.error));
    lines.push(Line::from(""));
  }
  lines.push(field_line("Full name", &form.name, form.focus == 0));
  lines.push(field_line("Email", &form.email, form.focus == 1));
  lines.push(field_line("Password", &form.password, form.focus == 2));
  lines.push(field_line("Confirm password", &form.confirm, form.focus == 3));
  lines.push(Line::from(""));
  lines.push(Line::from(if form.loading {
    "Registering…"
  } else {
    "Press Enter to create your account."
  }));
  lines.push(Line::from(""));
  lines.push(Line::from("Already have an account? Press Esc, then [l] to login."));

  f.render_widget(Paragraph::new(lines), inner);
}
