//! Domain models for clinical note generation.

mod note;
mod patient;

pub use note::*;
pub use patient::*;
