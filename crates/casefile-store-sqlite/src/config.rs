//! Where the database lives.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Name of the database file when none is configured.
pub const DEFAULT_NAME: &str = "fake";

/// Database identity: a file `name` inside `location`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DbConfig {
  pub name:     String,
  pub location: Location,
}

impl Default for DbConfig {
  fn default() -> Self {
    Self { name: DEFAULT_NAME.to_owned(), location: Location::Default }
  }
}

impl DbConfig {
  pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
    Self { location: Location::Dir(dir.into()), ..Self::default() }
  }

  /// The database file, or `None` for an in-memory database.
  pub fn path(&self) -> Option<PathBuf> {
    self.location.dir().map(|dir| dir.join(&self.name))
  }
}

/// Storage location, written in config as `"default"`, `"memory"` or a path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Location {
  /// The per-user data directory.
  #[default]
  Default,
  Memory,
  Dir(PathBuf),
}

impl From<String> for Location {
  fn from(s: String) -> Self {
    match s.as_str() {
      "default" | "" => Location::Default,
      "memory" | ":memory:" => Location::Memory,
      _ => Location::Dir(expand_tilde(Path::new(&s))),
    }
  }
}

impl Location {
  /// The directory holding the database file, `None` when in memory.
  pub fn dir(&self) -> Option<PathBuf> {
    match self {
      Location::Default => Some(default_dir()),
      Location::Memory => None,
      Location::Dir(dir) => Some(dir.clone()),
    }
  }
}

/// `$XDG_DATA_HOME/casefile`, else `~/.local/share/casefile`, else `.`.
fn default_dir() -> PathBuf {
  if let Some(data_home) = std::env::var_os("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
    return PathBuf::from(data_home).join("casefile");
  }
  if let Some(home) = std::env::var_os("HOME").filter(|v| !v.is_empty()) {
    return PathBuf::from(home).join(".local/share/casefile");
  }
  PathBuf::from(".")
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
