//! Synthetic contact roster generator.
//!
//! The first [`AT_RISK_COUNT`] contacts are at risk: younger, skewed male, and
//! active unless deceased. The rest form an inactive background population.

use rand::{
  Rng, SeedableRng,
  distributions::{Distribution, WeightedIndex},
  rngs::StdRng,
};

use crate::{
  Contact, DateOfBirth, Race, Result, Sex,
  names::{FIRST_NAMES, LAST_NAMES},
};

/// Number of leading contacts generated as at-risk.
pub const AT_RISK_COUNT: u32 = 20;

/// Size of a default roster.
pub const DEFAULT_ROSTER_SIZE: u32 = 50;

/// At-risk contacts with an index below this are deceased.
const AT_RISK_DECEASED_BELOW: u32 = 4;

/// Background contacts with an index below this are deceased.
const BACKGROUND_DECEASED_BELOW: u32 = 22;

const AT_RISK_YEARS: &[i32] = &[1994, 1996, 1997, 1998, 1999, 2000, 2001, 2002, 2003, 2004];

// 1995 is absent from both pools.
const BACKGROUND_YEARS: &[i32] = &[
  1975, 1976, 1977, 1978, 1979, 1980, 1981, 1982, 1983, 1984, 1985, 1986, 1987,
  1988, 1989, 1990, 1991, 1992, 1993, 1994, 1996, 1997, 1998, 1999, 2000,
];

/// Weights aligned with [`Race::ALL`].
const RACE_WEIGHTS: [f64; 5] = [0.60, 0.20, 0.10, 0.07, 0.03];

const AT_RISK_MALE_PROBABILITY: f64 = 0.60;
const BACKGROUND_MALE_PROBABILITY: f64 = 0.50;

// ─── Generator ───────────────────────────────────────────────────────────────

pub struct RosterGenerator<R> {
  rng:   R,
  races: WeightedIndex<f64>,
}

impl RosterGenerator<StdRng> {
  /// A generator whose output is fully determined by `seed`.
  pub fn from_seed(seed: u64) -> Result<Self> {
    Self::new(StdRng::seed_from_u64(seed))
  }

  /// A generator seeded from the operating system.
  pub fn from_os_rng() -> Result<Self> {
    Self::new(StdRng::from_rng(rand_core::OsRng)?)
  }
}

impl<R: Rng> RosterGenerator<R> {
  pub fn new(rng: R) -> Result<Self> {
    Ok(Self { rng, races: WeightedIndex::new(RACE_WEIGHTS)? })
  }

  /// Generate `count` contacts with ids `0..count`.
  pub fn generate(&mut self, count: u32) -> Result<Vec<Contact>> {
    (0..count).map(|i| self.contact(i)).collect()
  }

  fn contact(&mut self, index: u32) -> Result<Contact> {
    let at_risk = index < AT_RISK_COUNT;
    let is_deceased = if at_risk {
      index < AT_RISK_DECEASED_BELOW
    } else {
      index < BACKGROUND_DECEASED_BELOW
    };

    Ok(Contact {
      contact_id:  index,
      first_name:  self.pick(FIRST_NAMES).to_owned(),
      middle_name: self.pick(FIRST_NAMES).to_owned(),
      last_name:   self.pick(LAST_NAMES).to_owned(),
      dob:         self.dob(at_risk)?,
      race:        Race::ALL[self.races.sample(&mut self.rng)],
      sex:         self.sex(at_risk),
      notes:       String::new(),
      is_deceased,
      is_at_risk:  at_risk,
      is_active:   at_risk && !is_deceased,
    })
  }

  fn dob(&mut self, at_risk: bool) -> Result<DateOfBirth> {
    let month = self.rng.gen_range(1..=12);
    let day = self.rng.gen_range(1..=28);
    let year = self.pick(if at_risk { AT_RISK_YEARS } else { BACKGROUND_YEARS });
    DateOfBirth::from_ymd(year, month, day)
  }

  fn sex(&mut self, at_risk: bool) -> Sex {
    let p_male = if at_risk {
      AT_RISK_MALE_PROBABILITY
    } else {
      BACKGROUND_MALE_PROBABILITY
    };
    if self.rng.gen_bool(p_male) { Sex::Male } else { Sex::Female }
  }

  fn pick<T: Copy>(&mut self, pool: &[T]) -> T {
    pool[self.rng.gen_range(0..pool.len())]
  }
}
