//! Terminal output formatting
//!
//! Run summaries, warnings and pretty-printing helpers.

pub mod display;
pub mod formatters;

pub use display::{print_combine_result, print_missing_source, print_premium_result};
