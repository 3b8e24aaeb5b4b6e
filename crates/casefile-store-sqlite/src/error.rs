//! Error type for `casefile-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] casefile_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  /// The handle came from an open that failed and was only logged.
  #[error("database {0:?} is not open")]
  Disconnected(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
