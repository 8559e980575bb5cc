//! Core domain types for word curation
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear invariants.

mod source;
mod tier;
mod word;

pub use source::{Score, Source};
pub use tier::Tier;
pub use word::{WORD_LENGTH, Word, WordError, is_valid_word, validate};
