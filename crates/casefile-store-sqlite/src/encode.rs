//! Conversions between domain types and their SQLite column representations.

use casefile_core::Contact;

use crate::Result;

/// A `contacts` row as stored: enums and dates as text, flags as integers.
#[derive(Debug)]
pub(crate) struct RawContact {
  pub contact_id:  u32,
  pub first_name:  String,
  pub middle_name: String,
  pub last_name:   String,
  pub dob:         String,
  pub race:        String,
  pub sex:         String,
  pub notes:       String,
  pub is_deceased: bool,
  pub is_at_risk:  bool,
  pub is_active:   bool,
}

impl RawContact {
  pub(crate) const COLUMNS: &'static str = "contact_id, first_name, middle_name, last_name, dob, \
     race, sex, notes, is_deceased, is_at_risk, is_active";

  pub(crate) fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      contact_id:  row.get(0)?,
      first_name:  row.get(1)?,
      middle_name: row.get(2)?,
      last_name:   row.get(3)?,
      dob:         row.get(4)?,
      race:        row.get(5)?,
      sex:         row.get(6)?,
      notes:       row.get(7)?,
      is_deceased: row.get(8)?,
      is_at_risk:  row.get(9)?,
      is_active:   row.get(10)?,
    })
  }

  pub(crate) fn into_contact(self) -> Result<Contact> {
    Ok(Contact {
      contact_id:  self.contact_id,
      first_name:  self.first_name,
      middle_name: self.middle_name,
      last_name:   self.last_name,
      dob:         self.dob.parse()?,
      race:        self.race.parse()?,
      sex:         self.sex.parse()?,
      notes:       self.notes,
      is_deceased: self.is_deceased,
      is_at_risk:  self.is_at_risk,
      is_active:   self.is_active,
    })
  }
}

impl From<&Contact> for RawContact {
  fn from(c: &Contact) -> Self {
    Self {
      contact_id:  c.contact_id,
      first_name:  c.first_name.clone(),
      middle_name: c.middle_name.clone(),
      last_name:   c.last_name.clone(),
      dob:         c.dob.to_string(),
      race:        c.race.as_str().to_owned(),
      sex:         c.sex.as_str().to_owned(),
      notes:       c.notes.clone(),
      is_deceased: c.is_deceased,
      is_at_risk:  c.is_at_risk,
      is_active:   c.is_active,
    }
  }
}
