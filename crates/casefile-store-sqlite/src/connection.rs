//! [`Database`] — a handle on the local `fake` database.

use crate::{
  DbConfig, Error, Result,
  schema::{CREATE_FAKE_DATA, FAKE_DATA_TABLE},
};

// ─── Handle ──────────────────────────────────────────────────────────────────

/// A handle on one local SQLite database.
///
/// Cloning is cheap: the inner connection is reference-counted. A handle
/// returned by [`get_db_connection`] after a failed open holds no connection;
/// every operation on it fails with [`Error::Disconnected`].
#[derive(Clone)]
pub struct Database {
  name: String,
  conn: Option<tokio_rusqlite::Connection>,
}

/// Column metadata as reported by `PRAGMA table_info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
  pub name:      String,
  pub decl_type: String,
  pub not_null:  bool,
}

/// Open (or create) the database described by `config`.
///
/// An open failure is logged and swallowed; the returned handle is then
/// disconnected.
pub async fn get_db_connection(config: &DbConfig) -> Database {
  match Database::try_open(config).await {
    Ok(db) => db,
    Err(error) => {
      tracing::error!(name = %config.name, "Error: {error}");
      Database::disconnected(&config.name)
    }
  }
}

/// Ensure the `fakeData` table exists.
pub async fn create_table(db: &Database) -> Result<()> {
  db.execute_batch(CREATE_FAKE_DATA).await
}

impl Database {
  /// Open (or create) the database described by `config`, propagating any
  /// failure. Missing parent directories are created.
  pub async fn try_open(config: &DbConfig) -> Result<Self> {
    let conn = match config.path() {
      Some(path) => {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
          tokio::fs::create_dir_all(dir).await?;
        }
        tracing::debug!(path = %path.display(), "opening database");
        tokio_rusqlite::Connection::open(path).await?
      }
      None => tokio_rusqlite::Connection::open_in_memory().await?,
    };

    Ok(Self { name: config.name.clone(), conn: Some(conn) })
  }

  /// Open an in-memory database — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    Ok(Self { name: ":memory:".to_owned(), conn: Some(conn) })
  }

  fn disconnected(name: &str) -> Self {
    Self { name: name.to_owned(), conn: None }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub(crate) fn conn(&self) -> Result<&tokio_rusqlite::Connection> {
    self
      .conn
      .as_ref()
      .ok_or_else(|| Error::Disconnected(self.name.clone()))
  }

  pub(crate) async fn execute_batch(&self, sql: &'static str) -> Result<()> {
    self
      .conn()?
      .call(move |conn| {
        conn.execute_batch(sql)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  // ── fakeData ──────────────────────────────────────────────────────────────

  /// Append one row to `fakeData`.
  pub async fn insert_value(&self, value: impl Into<String>) -> Result<()> {
    let value = value.into();
    self
      .conn()?
      .call(move |conn| {
        conn.execute(
          "INSERT INTO fakeData (value) VALUES (?1)",
          rusqlite::params![value],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Every `fakeData` value in insertion order.
  pub async fn values(&self) -> Result<Vec<String>> {
    let values = self
      .conn()?
      .call(|conn| {
        let mut stmt = conn.prepare("SELECT value FROM fakeData ORDER BY rowid")?;
        let rows = stmt
          .query_map([], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(values)
  }

  // ── Introspection ─────────────────────────────────────────────────────────

  /// Names of all user tables, sorted.
  pub async fn table_names(&self) -> Result<Vec<String>> {
    let names = self
      .conn()?
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT name FROM sqlite_master
           WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
           ORDER BY name",
        )?;
        let rows = stmt
          .query_map([], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(names)
  }

  /// Columns of `table` in declaration order; empty if the table is absent.
  pub async fn table_columns(&self, table: &str) -> Result<Vec<ColumnInfo>> {
    let table = table.to_owned();
    let columns = self
      .conn()?
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT name, type, \"notnull\" FROM pragma_table_info(?1) ORDER BY cid",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![table], |row| {
            Ok(ColumnInfo {
              name:      row.get(0)?,
              decl_type: row.get(1)?,
              not_null:  row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(columns)
  }

  /// Shorthand for the columns of `fakeData`.
  pub async fn fake_data_columns(&self) -> Result<Vec<ColumnInfo>> {
    self.table_columns(FAKE_DATA_TABLE).await
  }
}
