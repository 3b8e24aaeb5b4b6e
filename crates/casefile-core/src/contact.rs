//! Contact — one person on the tracking roster.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;

use crate::Error;

/// Wire format of a date of birth, e.g. `07/14/1998`.
pub const DOB_FORMAT: &str = "%m/%d/%Y";

// ─── Race ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Race {
  Hispanic,
  WhiteNotHispanic,
  Black,
  Asian,
  Other,
}

impl Race {
  pub const ALL: [Race; 5] = [
    Race::Hispanic,
    Race::WhiteNotHispanic,
    Race::Black,
    Race::Asian,
    Race::Other,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      Race::Hispanic => "hispanic",
      Race::WhiteNotHispanic => "white-not-hispanic",
      Race::Black => "black",
      Race::Asian => "asian",
      Race::Other => "other",
    }
  }
}

impl fmt::Display for Race {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad(self.as_str())
  }
}

impl FromStr for Race {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Race::ALL
      .into_iter()
      .find(|r| r.as_str() == s)
      .ok_or_else(|| Error::UnknownRace(s.to_owned()))
  }
}

// ─── Sex ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
  Male,
  Female,
}

impl Sex {
  pub fn as_str(self) -> &'static str {
    match self {
      Sex::Male => "male",
      Sex::Female => "female",
    }
  }
}

impl fmt::Display for Sex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad(self.as_str())
  }
}

impl FromStr for Sex {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "male" => Ok(Sex::Male),
      "female" => Ok(Sex::Female),
      other => Err(Error::UnknownSex(other.to_owned())),
    }
  }
}

// ─── Date of birth ───────────────────────────────────────────────────────────

/// A calendar date rendered as `MM/DD/YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateOfBirth(pub NaiveDate);

impl DateOfBirth {
  pub fn from_ymd(year: i32, month: u32, day: u32) -> crate::Result<Self> {
    NaiveDate::from_ymd_opt(year, month, day)
      .map(Self)
      .ok_or_else(|| Error::InvalidDate(format!("{month:02}/{day:02}/{year}")))
  }
}

impl fmt::Display for DateOfBirth {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0.format(DOB_FORMAT))
  }
}

impl FromStr for DateOfBirth {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    NaiveDate::parse_from_str(s, DOB_FORMAT)
      .map(Self)
      .map_err(|_| Error::InvalidDate(s.to_owned()))
  }
}

// ─── Contact ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
  pub contact_id:  u32,
  pub first_name:  String,
  pub middle_name: String,
  pub last_name:   String,
  pub dob:         DateOfBirth,
  pub race:        Race,
  pub sex:         Sex,
  pub notes:       String,
  pub is_deceased: bool,
  pub is_at_risk:  bool,
  pub is_active:   bool,
}

impl Contact {
  /// First, middle and last name joined by single spaces; empty parts skipped.
  pub fn full_name(&self) -> String {
    [&self.first_name, &self.middle_name, &self.last_name]
      .into_iter()
      .filter(|part| !part.is_empty())
      .map(String::as_str)
      .collect::<Vec<_>>()
      .join(" ")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn race_parses_its_own_rendering() {
    for race in Race::ALL {
      assert_eq!(race.as_str().parse::<Race>().unwrap(), race);
    }
    assert!(matches!("martian".parse::<Race>(), Err(Error::UnknownRace(_))));
  }

  #[test]
  fn dob_uses_zero_padded_month_first() {
    let dob = DateOfBirth::from_ymd(1998, 7, 4).unwrap();
    assert_eq!(dob.to_string(), "07/04/1998");
    assert_eq!("07/04/1998".parse::<DateOfBirth>().unwrap(), dob);
  }

  #[test]
  fn dob_rejects_other_formats() {
    assert!(matches!(
      "1998-07-04".parse::<DateOfBirth>(),
      Err(Error::InvalidDate(_))
    ));
    assert!(DateOfBirth::from_ymd(2001, 2, 30).is_err());
  }

  #[test]
  fn full_name_skips_empty_parts() {
    let contact = Contact {
      contact_id:  1,
      first_name:  "Ada".into(),
      middle_name: String::new(),
      last_name:   "Byron".into(),
      dob:         DateOfBirth::from_ymd(1990, 12, 10).unwrap(),
      race:        Race::Other,
      sex:         Sex::Female,
      notes:       String::new(),
      is_deceased: false,
      is_at_risk:  false,
      is_active:   false,
    };
    assert_eq!(contact.full_name(), "Ada Byron");
  }
}
