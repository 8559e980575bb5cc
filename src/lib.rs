//! Wordle Curator
//!
//! Curates five-letter word lists for word games by merging ranked source
//! wordlists into de-duplicated, tiered output lists.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_curator::core::{Tier, Word};
//! use wordle_curator::curation::{WordScoreTable, merge_fragments, partition};
//!
//! let answers = WordScoreTable::from_words([Word::new("apple").unwrap()], 100);
//! let common = WordScoreTable::from_words([Word::new("crane").unwrap()], 90);
//!
//! let (table, _) = merge_fragments([answers, common]);
//! let tiers = partition(&table, &[Tier::HIGH]);
//! assert_eq!(tiers[0].words.len(), 2);
//! ```

// Core domain types
pub mod core;

// Merge, tiering and premium algorithms
pub mod curation;

// Word list files
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
