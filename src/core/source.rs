//! Source wordlists and their trust scores

use std::fmt;

/// Priority score of a source (higher = more trusted)
pub type Score = u32;

/// A raw wordlist the curator knows how to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// Official Wordle answers, proven good words
    WordleAnswers,
    /// Frequency-based list of common words
    GoogleCommon,
    /// Stanford Graph Base, academically curated
    StanfordGraphBase,
    /// Wordle allowed guesses, valid but sometimes obscure
    WordleAllowed,
    /// Cleaned SOWPODS scrabble dictionary
    Sowpods,
}

impl Source {
    /// All sources in descending priority order
    pub const PRIORITY_ORDER: [Self; 5] = [
        Self::WordleAnswers,
        Self::GoogleCommon,
        Self::StanfordGraphBase,
        Self::WordleAllowed,
        Self::Sowpods,
    ];

    /// The three highest-trust sources used by the premium pipeline
    pub const PREMIUM: [Self; 3] = [
        Self::WordleAnswers,
        Self::GoogleCommon,
        Self::StanfordGraphBase,
    ];

    /// File name of the source inside the data directory
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::WordleAnswers => "wordle_answers_list.txt",
            Self::GoogleCommon => "google_common_5_letter.txt",
            Self::StanfordGraphBase => "sgb_words.txt",
            Self::WordleAllowed => "wordle_all_allowed.txt",
            Self::Sowpods => "sowpods_5_letter_clean.txt",
        }
    }

    #[must_use]
    pub const fn priority(self) -> Score {
        match self {
            Self::WordleAnswers => 100,
            Self::GoogleCommon => 90,
            Self::StanfordGraphBase => 80,
            Self::WordleAllowed => 60,
            Self::Sowpods => 40,
        }
    }

    /// Human readable name for summaries
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WordleAnswers => "Wordle answers",
            Self::GoogleCommon => "Google common",
            Self::StanfordGraphBase => "Stanford Graph Base",
            Self::WordleAllowed => "Wordle allowed",
            Self::Sowpods => "SOWPODS",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
