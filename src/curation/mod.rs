//! Word curation algorithms
//!
//! This module contains the two curation pipelines: the priority merge with
//! tier partitioning, and the set-based premium/daily builder.

mod bounded;
pub mod premium;
mod score_table;
pub mod tiers;

pub use bounded::BoundedList;
pub use premium::{DAILY_CAP, PremiumSources, SourceOverlaps, WordSet};
pub use score_table::{Insertion, MergeStats, WordScoreTable, merge_fragments};
pub use tiers::{TierList, partition};
