//! Contact details screen.
//!
//! Static content for now: the route parameters identifying the contact are
//! accepted but not read.

use ratatui::{
  Frame,
  buffer::Buffer,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Style},
  text::{Line, Span, Text},
  widgets::{Block, Paragraph, Widget},
};

use crate::app::{App, Navigation, Route};

pub const FIRST_PART: &str = "First part and ";
pub const SECOND_PART: &str = "second part";

// ─── Style ────────────────────────────────────────────────────────────────────

/// How the container sits in its parent's cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignSelf {
  Stretch,
}

/// Flexbox-style description of the top-level container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerStyle {
  pub flex:       u16,
  pub background: Color,
  pub direction:  Direction,
  pub align_self: AlignSelf,
}

/// `#fff` background; children laid out in a row filling the area.
pub const CONTAINER: ContainerStyle = ContainerStyle {
  flex:       1,
  background: Color::Rgb(0xff, 0xff, 0xff),
  direction:  Direction::Horizontal,
  align_self: AlignSelf::Stretch,
};

// ─── Widget ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct ContactDetails;

impl ContactDetails {
  pub fn new(_navigation: Option<&Navigation>, _route: Option<&Route>) -> Self {
    Self
  }

  pub fn style(&self) -> ContainerStyle {
    CONTAINER
  }

  /// One line made of two nested spans.
  pub fn text(&self) -> Text<'static> {
    Text::from(Line::from(vec![Span::raw(FIRST_PART), Span::raw(SECOND_PART)]))
  }
}

impl Widget for ContactDetails {
  fn render(self, area: Rect, buf: &mut Buffer) {
    let style = self.style();

    let container = Block::default().style(Style::default().bg(style.background));
    let inner = container.inner(area);
    container.render(area, buf);

    let [cell] = Layout::default()
      .direction(style.direction)
      .constraints([Constraint::Fill(style.flex)])
      .areas(inner);

    Paragraph::new(self.text())
      .style(Style::default().fg(Color::Black))
      .render(cell, buf);
  }
}

/// Render the details pane into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let details = ContactDetails::new(Some(&app.navigation), Some(app.navigation.current()));
  f.render_widget(details, area);
}

#[cfg(test)]
mod tests {
  use ratatui::{Terminal, backend::TestBackend};
  use serde_json::json;

  use super::*;
  use crate::app::Screen;

  fn rendered_row(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
  }

  #[test]
  fn text_is_two_parts_concatenated() {
    let text = ContactDetails::new(None, None).text();
    assert_eq!(text.lines.len(), 1);
    assert_eq!(text.lines[0].spans.len(), 2);

    let joined: String = text.lines[0]
      .spans
      .iter()
      .map(|span| span.content.as_ref())
      .collect();
    assert_eq!(joined, "First part and second part");
  }

  #[test]
  fn container_lays_out_in_a_row() {
    let style = ContactDetails::new(None, None).style();
    assert_eq!(style.direction, Direction::Horizontal);
    assert_ne!(style.direction, Direction::Vertical);
    assert_eq!(style.flex, 1);
    assert_eq!(style.align_self, AlignSelf::Stretch);
    assert_eq!(style.background, Color::Rgb(255, 255, 255));
  }

  #[test]
  fn renders_without_navigation_or_route() {
    let mut buf = Buffer::empty(Rect::new(0, 0, 32, 3));
    ContactDetails::new(None, None).render(buf.area, &mut buf);

    assert_eq!(rendered_row(&buf, 0), "First part and second part      ");
    assert_eq!(rendered_row(&buf, 1).trim(), "");
    assert!(buf.content().iter().all(|cell| cell.bg == Color::Rgb(255, 255, 255)));
  }

  #[test]
  fn route_params_do_not_change_output() {
    let nav = Navigation::new(Route::new(Screen::ContactList));
    let route = Route::new(Screen::ContactDetails).with_params(json!({ "contactId": 9 }));

    let mut plain = Buffer::empty(Rect::new(0, 0, 32, 2));
    ContactDetails::new(None, None).render(plain.area, &mut plain);
    let mut routed = Buffer::empty(Rect::new(0, 0, 32, 2));
    ContactDetails::new(Some(&nav), Some(&route)).render(routed.area, &mut routed);

    assert_eq!(plain, routed);
  }

  #[test]
  fn draws_inside_a_frame() {
    let app = crate::app::App::new(Vec::new());
    let mut terminal = Terminal::new(TestBackend::new(30, 2)).unwrap();
    terminal.draw(|f| draw(f, f.area(), &app)).unwrap();

    let row = rendered_row(terminal.backend().buffer(), 0);
    assert!(row.starts_with("First part and second part"));
  }
}
