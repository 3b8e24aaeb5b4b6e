//! The `contacts` table: the stored tracking roster.

use casefile_core::Contact;

use crate::{Database, Result, encode::RawContact, schema::CREATE_CONTACTS};

impl Database {
  /// Ensure the `contacts` table exists.
  pub async fn create_contacts_table(&self) -> Result<()> {
    self.execute_batch(CREATE_CONTACTS).await
  }

  /// Insert or replace `contacts` in one transaction, keyed by contact id.
  /// Returns the number of rows written.
  pub async fn insert_contacts(&self, contacts: &[Contact]) -> Result<usize> {
    let raws: Vec<RawContact> = contacts.iter().map(RawContact::from).collect();

    let written = self
      .conn()?
      .call(move |conn| {
        let tx = conn.transaction()?;
        {
          let mut stmt = tx.prepare(&format!(
            "INSERT OR REPLACE INTO contacts ({})
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            RawContact::COLUMNS
          ))?;
          for raw in &raws {
            stmt.execute(rusqlite::params![
              raw.contact_id,
              raw.first_name,
              raw.middle_name,
              raw.last_name,
              raw.dob,
              raw.race,
              raw.sex,
              raw.notes,
              raw.is_deceased,
              raw.is_at_risk,
              raw.is_active,
            ])?;
          }
        }
        tx.commit()?;
        Ok(raws.len())
      })
      .await?;

    tracing::debug!(written, "stored contacts");
    Ok(written)
  }

  /// All stored contacts ordered by id.
  pub async fn list_contacts(&self) -> Result<Vec<Contact>> {
    let raws: Vec<RawContact> = self
      .conn()?
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {} FROM contacts ORDER BY contact_id",
          RawContact::COLUMNS
        ))?;
        let rows = stmt
          .query_map([], RawContact::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContact::into_contact).collect()
  }

  pub async fn get_contact(&self, contact_id: u32) -> Result<Option<Contact>> {
    use rusqlite::OptionalExtension as _;

    let raw: Option<RawContact> = self
      .conn()?
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "SELECT {} FROM contacts WHERE contact_id = ?1",
                RawContact::COLUMNS
              ),
              rusqlite::params![contact_id],
              RawContact::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }
}
