//! Layered configuration: optional TOML file, then `CASEFILE_*` environment.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use casefile_store_sqlite::DbConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
  pub database: DbConfig,
  /// Write logs here instead of stderr.
  pub log_file: Option<PathBuf>,
}

impl Settings {
  /// Load from `path` (missing file is fine) overlaid with the environment,
  /// e.g. `CASEFILE_DATABASE__LOCATION=memory`.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    config::Config::builder()
      .add_source(config::File::from(path.to_path_buf()).required(false))
      .add_source(
        config::Environment::with_prefix("CASEFILE")
          .prefix_separator("_")
          .separator("__"),
      )
      .build()
      .with_context(|| format!("failed to read config file {}", path.display()))?
      .try_deserialize()
      .context("failed to deserialise settings")
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write as _;

  use casefile_store_sqlite::Location;

  use super::*;

  #[test]
  fn missing_file_gives_defaults() {
    let settings = Settings::load(Path::new("/nonexistent/casefile.toml")).unwrap();
    assert_eq!(settings.database.name, "fake");
    assert!(settings.log_file.is_none());
  }

  #[test]
  fn environment_overrides_database_location() {
    // SAFETY: no other test in this crate reads or writes this variable.
    unsafe { std::env::set_var("CASEFILE_DATABASE__LOCATION", "memory") };
    let settings = Settings::load(Path::new("/nonexistent/casefile.toml"));
    unsafe { std::env::remove_var("CASEFILE_DATABASE__LOCATION") };

    assert_eq!(settings.unwrap().database.location, Location::Memory);
  }

  #[test]
  fn file_overrides_database_section() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
      file,
      "log_file = \"casefile.log\"\n[database]\nname = \"roster\"\nlocation = \"memory\""
    )
    .unwrap();

    let settings = Settings::load(file.path()).unwrap();
    assert_eq!(settings.database.name, "roster");
    assert_eq!(settings.database.location, Location::Memory);
    assert_eq!(settings.log_file, Some(PathBuf::from("casefile.log")));
  }
}
