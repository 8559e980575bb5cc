//! Word list files
//!
//! Reading source lists, writing curated lists, and the fixed output names.

pub mod loader;
pub mod writer;

/// Common prefix of every curated output file
pub const OUTPUT_PREFIX: &str = "curated_5_letter_words";

/// Output list name of the premium pipeline's uncapped list
pub const PREMIUM_LIST: &str = "premium";

/// Output list name of the premium pipeline's capped list
pub const DAILY_LIST: &str = "daily";

/// File name of a curated list, e.g. `curated_5_letter_words_high.txt`
#[must_use]
pub fn output_file_name(list: &str) -> String {
    format!("{OUTPUT_PREFIX}_{list}.txt")
}
