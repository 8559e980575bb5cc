//! Formatting utilities for terminal output

use crate::core::Word;

/// Join the first `count` words with commas
#[must_use]
pub fn example_words(words: &[Word], count: usize) -> String {
    words
        .iter()
        .take(count)
        .map(Word::text)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing a list's size relative to the largest list
#[must_use]
pub fn size_bar(size: usize, largest: usize, width: usize) -> String {
    create_progress_bar(size as f64, largest as f64, width)
}

/// Percentage of `part` in `whole`, zero for an empty whole
#[must_use]
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
