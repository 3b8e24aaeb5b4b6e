//! Contact list pane — left panel.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::app::App;

/// Render the contact list into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(format!(" Contacts ({}) ", app.contacts.len()))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let items: Vec<ListItem> = app
    .contacts
    .iter()
    .map(|contact| {
      let (marker, marker_style) = if contact.is_deceased {
        ("x ", Style::default().fg(Color::DarkGray))
      } else if contact.is_at_risk {
        ("! ", Style::default().fg(Color::Red))
      } else {
        ("  ", Style::default())
      };

      ListItem::new(Line::from(vec![
        Span::styled(marker, marker_style),
        Span::raw(contact.full_name()),
      ]))
    })
    .collect();

  let mut state = ListState::default();
  state.select(if app.contacts.is_empty() {
    None
  } else {
    Some(app.list_cursor)
  });

  f.render_stateful_widget(
    List::new(items)
      .block(block)
      .highlight_style(
        Style::default()
          .bg(Color::Blue)
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol(""),
    area,
    &mut state,
  );
}
