//! TUI rendering — orchestrates all panes.

pub mod contact_details;
pub mod contact_list;

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Screen};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(f.area());

  draw_header(f, rows[0], app);
  draw_body(f, rows[1], app);
  draw_status(f, rows[2], app);
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
  let at_risk = app.contacts.iter().filter(|c| c.is_at_risk).count();
  let active = app.contacts.iter().filter(|c| c.is_active).count();

  let line = Line::from(vec![
    Span::styled(
      " casefile  [q] quit",
      Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD),
    ),
    Span::styled(
      format!("   {at_risk} at risk, {active} active"),
      Style::default().fg(Color::Gray),
    ),
  ]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
    .split(area);

  contact_list::draw(f, cols[0], app);

  match app.screen() {
    Screen::ContactDetails => contact_details::draw(f, cols[1], app),
    Screen::ContactList => draw_empty_detail(f, cols[1]),
  }
}

fn draw_empty_detail(f: &mut Frame, area: Rect) {
  let block = Block::default()
    .title(" Details ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(
    Paragraph::new(Span::styled(
      "Select a contact and press Enter.",
      Style::default().fg(Color::DarkGray),
    )),
    inner,
  );
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = match app.screen() {
    Screen::ContactList => ("LIST", "↑↓/jk navigate  Enter details  q quit"),
    Screen::ContactDetails => ("DETAILS", "Esc back  q quit"),
  };

  let status = if app.status_msg.is_empty() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let line = Line::from(vec![
    Span::styled(
      format!(" {mode_label} "),
      Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    ),
    Span::styled(format!("  {status}"), Style::default().fg(Color::DarkGray)),
  ]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}

#[cfg(test)]
mod tests {
  use casefile_core::generate::RosterGenerator;
  use crossterm::event::{KeyCode, KeyEvent};
  use ratatui::{Terminal, backend::TestBackend};

  use super::*;

  fn screen_text(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(200, 12)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    let buf = terminal.backend().buffer();
    buf.content().iter().map(|cell| cell.symbol()).collect()
  }

  #[test]
  fn list_screen_shows_hint_and_names() {
    let app = App::new(RosterGenerator::from_seed(4).unwrap().generate(3).unwrap());
    let text = screen_text(&app);
    assert!(text.contains("Select a contact and press Enter."));
    assert!(text.contains(&app.contacts[0].full_name()));
    assert!(text.contains(" LIST "));
  }

  #[test]
  fn status_bar_shows_load_error() {
    let app = App::failed("database \"fake\" is not open");
    let text = screen_text(&app);
    assert!(text.contains("Error: database \"fake\" is not open"));
    assert!(text.contains("Contacts (0)"));
  }

  #[test]
  fn details_screen_shows_static_text() {
    let mut app = App::new(RosterGenerator::from_seed(4).unwrap().generate(3).unwrap());
    app.handle_key(KeyEvent::from(KeyCode::Enter));

    let text = screen_text(&app);
    assert!(text.contains("First part and second part"));
    assert!(text.contains(" DETAILS "));
  }
}
