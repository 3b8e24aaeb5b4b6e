//! Core domain types for casefile.
//!
//! Holds the contact model shared by the storage backend and the CLI, the
//! roster generator used to seed test data, and the roster CSV codec.

pub mod contact;
pub mod error;
pub mod generate;
pub mod roster;

mod names;

pub use contact::{Contact, DateOfBirth, Race, Sex};
pub use error::{Error, Result};
