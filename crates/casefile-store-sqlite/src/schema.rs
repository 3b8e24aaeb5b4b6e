//! SQL schema for the casefile store.
//!
//! Every statement is idempotent thanks to `CREATE TABLE IF NOT EXISTS`.

pub const FAKE_DATA_TABLE: &str = "fakeData";

/// The single-column scratch table.
pub const CREATE_FAKE_DATA: &str = "CREATE TABLE IF NOT EXISTS fakeData(value TEXT NOT NULL);";

pub const CREATE_CONTACTS: &str = "
CREATE TABLE IF NOT EXISTS contacts (
    contact_id  INTEGER PRIMARY KEY,
    first_name  TEXT    NOT NULL,
    middle_name TEXT    NOT NULL,
    last_name   TEXT    NOT NULL,
    dob         TEXT    NOT NULL,   -- MM/DD/YYYY
    race        TEXT    NOT NULL,
    sex         TEXT    NOT NULL,
    notes       TEXT    NOT NULL DEFAULT '',
    is_deceased INTEGER NOT NULL,
    is_at_risk  INTEGER NOT NULL,
    is_active   INTEGER NOT NULL
);
";
