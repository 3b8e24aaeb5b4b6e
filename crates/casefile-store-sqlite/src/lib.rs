//! SQLite backend for casefile.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime.

mod config;
mod connection;
mod contacts;
mod encode;
mod schema;

pub mod error;

pub use config::{DEFAULT_NAME, DbConfig, Location};
pub use connection::{ColumnInfo, Database, create_table, get_db_connection};
pub use error::{Error, Result};
pub use schema::FAKE_DATA_TABLE;
