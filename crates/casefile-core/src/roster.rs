//! Roster CSV codec.
//!
//! One header line followed by one record per contact. Booleans are written
//! as `0`/`1`; dates as `MM/DD/YYYY`.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::{Contact, Error, Result};

pub const HEADER: [&str; 11] = [
  "contactID",
  "firstName",
  "middleName",
  "lastName",
  "DoB",
  "race",
  "sex",
  "notes",
  "isDeceased",
  "isAtRisk",
  "isActive",
];

/// A roster record exactly as it appears in the file.
#[derive(Debug, Serialize, Deserialize)]
struct RawRow {
  #[serde(rename = "contactID")]
  contact_id:  u32,
  #[serde(rename = "firstName")]
  first_name:  String,
  #[serde(rename = "middleName")]
  middle_name: String,
  #[serde(rename = "lastName")]
  last_name:   String,
  #[serde(rename = "DoB")]
  dob:         String,
  race:        String,
  sex:         String,
  #[serde(default)]
  notes:       String,
  #[serde(rename = "isDeceased")]
  is_deceased: u8,
  #[serde(rename = "isAtRisk")]
  is_at_risk:  u8,
  #[serde(rename = "isActive")]
  is_active:   u8,
}

impl From<&Contact> for RawRow {
  fn from(c: &Contact) -> Self {
    Self {
      contact_id:  c.contact_id,
      first_name:  c.first_name.clone(),
      middle_name: c.middle_name.clone(),
      last_name:   c.last_name.clone(),
      dob:         c.dob.to_string(),
      race:        c.race.to_string(),
      sex:         c.sex.to_string(),
      notes:       c.notes.clone(),
      is_deceased: c.is_deceased.into(),
      is_at_risk:  c.is_at_risk.into(),
      is_active:   c.is_active.into(),
    }
  }
}

impl RawRow {
  fn into_contact(self) -> Result<Contact> {
    Ok(Contact {
      contact_id:  self.contact_id,
      first_name:  self.first_name,
      middle_name: self.middle_name,
      last_name:   self.last_name,
      dob:         self.dob.parse()?,
      race:        self.race.parse()?,
      sex:         self.sex.parse()?,
      notes:       self.notes,
      is_deceased: decode_flag("isDeceased", self.is_deceased)?,
      is_at_risk:  decode_flag("isAtRisk", self.is_at_risk)?,
      is_active:   decode_flag("isActive", self.is_active)?,
    })
  }
}

fn decode_flag(field: &'static str, value: u8) -> Result<bool> {
  match value {
    0 => Ok(false),
    1 => Ok(true),
    value => Err(Error::InvalidFlag { field, value }),
  }
}

// ─── Public API ──────────────────────────────────────────────────────────────

/// Write the header and every contact. The header is written even when
/// `contacts` is empty.
pub fn write_roster<W: Write>(writer: W, contacts: &[Contact]) -> Result<()> {
  let mut csv = csv::WriterBuilder::new()
    .has_headers(false)
    .from_writer(writer);

  csv.write_record(HEADER)?;
  for contact in contacts {
    csv.serialize(RawRow::from(contact))?;
  }
  csv.flush()?;
  Ok(())
}

/// Read a roster; columns are matched by header name.
pub fn read_roster<R: Read>(reader: R) -> Result<Vec<Contact>> {
  csv::Reader::from_reader(reader)
    .deserialize::<RawRow>()
    .map(|row| row?.into_contact())
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::generate::RosterGenerator;

  const SAMPLE: &str = "\
contactID,firstName,middleName,lastName,DoB,race,sex,notes,isDeceased,isAtRisk,isActive
0,Maria,Elena,Garcia,03/17/1999,hispanic,female,,1,1,0
21,Thomas,Leo,Smith,11/02/1983,white-not-hispanic,male,,1,0,0
";

  #[test]
  fn empty_roster_still_has_header() {
    let mut out = Vec::new();
    write_roster(&mut out, &[]).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", HEADER.join(",")));
  }

  #[test]
  fn reads_sample_file() {
    let contacts = read_roster(SAMPLE.as_bytes()).unwrap();
    assert_eq!(contacts.len(), 2);

    let maria = &contacts[0];
    assert_eq!(maria.full_name(), "Maria Elena Garcia");
    assert_eq!(maria.dob.to_string(), "03/17/1999");
    assert_eq!(maria.race, crate::Race::Hispanic);
    assert!(maria.is_deceased && maria.is_at_risk && !maria.is_active);

    let thomas = &contacts[1];
    assert_eq!(thomas.contact_id, 21);
    assert_eq!(thomas.race, crate::Race::WhiteNotHispanic);
    assert_eq!(thomas.sex, crate::Sex::Male);
  }

  #[test]
  fn written_rows_match_header_order() {
    let contacts = read_roster(SAMPLE.as_bytes()).unwrap();
    let mut out = Vec::new();
    write_roster(&mut out, &contacts).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), SAMPLE);
  }

  #[test]
  fn generated_roster_survives_the_file_format() {
    let contacts = RosterGenerator::from_seed(8).unwrap().generate(50).unwrap();
    let mut out = Vec::new();
    write_roster(&mut out, &contacts).unwrap();
    assert_eq!(read_roster(out.as_slice()).unwrap(), contacts);
  }

  #[test]
  fn rejects_unknown_race() {
    let bad = SAMPLE.replace("hispanic,female", "martian,female");
    assert!(matches!(read_roster(bad.as_bytes()), Err(Error::UnknownRace(_))));
  }

  #[test]
  fn rejects_non_binary_flag() {
    let bad = SAMPLE.replace(",,1,1,0", ",,2,1,0");
    assert!(matches!(
      read_roster(bad.as_bytes()),
      Err(Error::InvalidFlag { field: "isDeceased", value: 2 })
    ));
  }
}
