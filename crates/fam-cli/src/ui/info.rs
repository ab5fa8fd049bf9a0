//! Static informational screens — landing page and the founders page.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Wrap},
};

fn heading(text: &str) -> Line<'static> {
  Line::from(Span::styled(
    text.to_string(),
    Style::default()
      .fg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  ))
}

fn dim(text: &str) -> Line<'static> {
  Line::from(Span::styled(
    text.to_string(),
    Style::default().fg(Color::Gray),
  ))
}

// ─── Landing ──────────────────────────────────────────────────────────────────

pub fn draw_landing(f: &mut Frame, area: Rect) {
  let block = Block::default()
    .title(" Premium PET Bottle Solutions ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let lines = vec![
    heading("FAM Bottling Co"),
    dim("Dedicated to sustainable PET bottle solutions and environmental protection."),
    Line::from(""),
    heading("Why supply with us?"),
    Line::from("  • Cashback rewards — earn 10% cashback as a returning customer on every supply"),
    Line::from("  • Fast processing — quick approval and payment for your supplies"),
    Line::from("  • Sustainable — every bottle you return stays out of the ocean"),
    Line::from(""),
    heading("Available bottle sizes"),
    Line::from("  30cl   50cl   60cl   75cl   1L   1.5L"),
    Line::from(""),
    heading("Ready to get started?"),
    Line::from("  Join our growing network of suppliers and start earning rewards today."),
    dim("  Press [r] to register or [l] to sign in."),
  ];

  f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

// ─── Founders ─────────────────────────────────────────────────────────────────

pub fn draw_founders(f: &mut Frame, area: Rect) {
  let block = Block::default()
    .title(" Meet the Founders ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let lines = vec![
    dim("The passionate team behind FAM Bottling Co."),
    Line::from(""),
    heading("Engr Adam Muhammad"),
    dim("  Founder & CEO"),
    Line::from(""),
    heading("Engr Fatima Umar-Sadiq"),
    dim("  Co-Founder & Operations Lead"),
    Line::from(""),
    heading("Engr Yahaya Muhammad"),
    dim("  Co-Founder & Technical Lead"),
    Line::from(""),
    heading("Our story"),
    Line::from(
      "  FAM Bottling Co was founded to tackle plastic pollution at its source: \
       by paying suppliers fairly for every batch of PET bottles they bring back \
       into the loop.",
    ),
  ];

  f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
