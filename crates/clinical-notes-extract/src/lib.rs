//! Rule-based fact extraction for consultation transcripts.
//!
//! This crate pulls symptom phrases, the first stated duration, and vital
//! sign readings out of free text using a fixed set of case-insensitive
//! patterns. Extraction never fails: anything not found is simply absent.

pub mod extraction;
pub mod patterns;

pub use extraction::*;
