use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("csv error: {0}")]
  Csv(#[from] csv::Error),

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("invalid date of birth: {0:?} (expected MM/DD/YYYY)")]
  InvalidDate(String),

  #[error("unknown race: {0:?}")]
  UnknownRace(String),

  #[error("unknown sex: {0:?}")]
  UnknownSex(String),

  #[error("expected 0 or 1 for {field}, got {value}")]
  InvalidFlag { field: &'static str, value: u8 },

  #[error("entropy source failed: {0}")]
  Entropy(#[from] rand_core::Error),

  #[error("invalid weights: {0}")]
  Weights(#[from] rand::distributions::WeightedError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
