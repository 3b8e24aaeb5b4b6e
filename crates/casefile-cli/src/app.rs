//! Application state, navigation stack and key dispatcher.

use casefile_core::Contact;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::{Value, json};

// ─── Navigation ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
  ContactList,
  ContactDetails,
}

/// A screen plus whatever parameters it was opened with.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
  pub screen: Screen,
  pub params: Option<Value>,
}

impl Route {
  pub fn new(screen: Screen) -> Self {
    Self { screen, params: None }
  }

  pub fn with_params(mut self, params: Value) -> Self {
    self.params = Some(params);
    self
  }
}

/// Stack of visited routes. The root route is never popped.
#[derive(Debug, Clone)]
pub struct Navigation {
  stack: Vec<Route>,
}

impl Navigation {
  pub fn new(root: Route) -> Self {
    Self { stack: vec![root] }
  }

  pub fn navigate(&mut self, route: Route) {
    self.stack.push(route);
  }

  /// Pop the current route. Returns `false` when already at the root.
  pub fn go_back(&mut self) -> bool {
    if self.stack.len() > 1 {
      self.stack.pop();
      true
    } else {
      false
    }
  }

  pub fn current(&self) -> &Route {
    // The stack always holds the root.
    &self.stack[self.stack.len() - 1]
  }
}

// ─── App ──────────────────────────────────────────────────────────────────────

pub struct App {
  /// Contacts loaded from the store on startup.
  pub contacts: Vec<Contact>,

  /// Cursor position within `contacts`.
  pub list_cursor: usize,

  pub navigation: Navigation,

  /// One-line status message shown in the status bar until the next key.
  pub status_msg: String,
}

impl App {
  pub fn new(contacts: Vec<Contact>) -> Self {
    let status_msg = format!("{} contacts loaded", contacts.len());
    Self {
      contacts,
      list_cursor: 0,
      navigation: Navigation::new(Route::new(Screen::ContactList)),
      status_msg,
    }
  }

  /// An empty app reporting why the contacts could not be loaded.
  pub fn failed(error: impl std::fmt::Display) -> Self {
    Self {
      status_msg: format!("Error: {error}"),
      ..Self::new(Vec::new())
    }
  }

  pub fn screen(&self) -> Screen {
    self.navigation.current().screen
  }

  /// The contact under the list cursor, if any.
  pub fn cursor_contact(&self) -> Option<&Contact> {
    self.contacts.get(self.list_cursor)
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub fn handle_key(&mut self, key: KeyEvent) -> bool {
    self.status_msg.clear();

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    match self.screen() {
      Screen::ContactList => self.handle_list_key(key),
      Screen::ContactDetails => self.handle_details_key(key),
    }
  }

  fn handle_list_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char('q') => return false,

      KeyCode::Down | KeyCode::Char('j') => {
        if self.list_cursor + 1 < self.contacts.len() {
          self.list_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.list_cursor = self.list_cursor.saturating_sub(1);
      }

      KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
        if let Some(id) = self.cursor_contact().map(|c| c.contact_id) {
          self.open_details(id);
        }
      }

      _ => {}
    }
    true
  }

  fn handle_details_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char('q') => return false,
      KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') => {
        self.navigation.go_back();
      }
      _ => {}
    }
    true
  }

  fn open_details(&mut self, contact_id: u32) {
    self.navigation.navigate(
      Route::new(Screen::ContactDetails).with_params(json!({ "contactId": contact_id })),
    );
  }
}

#[cfg(test)]
mod tests {
  use casefile_core::generate::RosterGenerator;

  use super::*;

  fn app() -> App {
    App::new(RosterGenerator::from_seed(1).unwrap().generate(3).unwrap())
  }

  fn press(app: &mut App, code: KeyCode) -> bool {
    app.handle_key(KeyEvent::from(code))
  }

  #[test]
  fn starts_on_contact_list() {
    let app = app();
    assert_eq!(app.screen(), Screen::ContactList);
    assert_eq!(app.navigation.current().params, None);
  }

  #[test]
  fn load_message_clears_on_first_key() {
    let mut app = app();
    assert_eq!(app.status_msg, "3 contacts loaded");
    press(&mut app, KeyCode::Down);
    assert!(app.status_msg.is_empty());
  }

  #[test]
  fn failed_load_reports_error() {
    let app = App::failed("database \"fake\" is not open");
    assert!(app.contacts.is_empty());
    assert_eq!(app.status_msg, "Error: database \"fake\" is not open");
  }

  #[test]
  fn cursor_stays_in_bounds() {
    let mut app = app();
    press(&mut app, KeyCode::Up);
    assert_eq!(app.list_cursor, 0);
    for _ in 0..10 {
      press(&mut app, KeyCode::Char('j'));
    }
    assert_eq!(app.list_cursor, 2);
  }

  #[test]
  fn enter_pushes_details_with_contact_id() {
    let mut app = app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    let route = app.navigation.current();
    assert_eq!(route.screen, Screen::ContactDetails);
    assert_eq!(route.params, Some(json!({ "contactId": 1 })));
  }

  #[test]
  fn escape_returns_to_list_but_not_past_root() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    assert!(press(&mut app, KeyCode::Esc));
    assert_eq!(app.screen(), Screen::ContactList);
    assert!(!app.navigation.go_back());
  }

  #[test]
  fn enter_on_empty_list_stays_put() {
    let mut app = App::new(Vec::new());
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen(), Screen::ContactList);
  }

  #[test]
  fn q_and_ctrl_c_quit() {
    let mut app = app();
    assert!(!press(&mut app, KeyCode::Char('q')));
    assert!(!app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
  }
}
