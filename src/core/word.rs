//! Curated word representation
//!
//! A Word is a normalized five-letter entry that passed validation. Everything
//! downstream of the loader works with `Word` so an unchecked string can never
//! end up in an output list.

use std::borrow::Borrow;
use std::fmt;

/// Number of characters in every curated word
pub const WORD_LENGTH: usize = 5;

/// A validated five-letter word
///
/// Ordering is lexicographic by code point, which is the alphabetical order
/// used in every output file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(String);

/// Reason a candidate line is not a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAlphabetic,
    NotLowercase,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAlphabetic => write!(f, "Word must contain only letters"),
            Self::NotLowercase => write!(f, "Word must be entirely lowercase"),
        }
    }
}

impl std::error::Error for WordError {}

/// Check a candidate exactly as given, without normalizing it
///
/// # Errors
/// Returns the first rule the candidate breaks: length, then letters, then case.
pub fn validate(candidate: &str) -> Result<(), WordError> {
    let len = candidate.chars().count();
    if len != WORD_LENGTH {
        return Err(WordError::InvalidLength(len));
    }

    if !candidate.chars().all(char::is_alphabetic) {
        return Err(WordError::NonAlphabetic);
    }

    // At least one cased letter and no uppercase ones
    if candidate.chars().any(char::is_uppercase) || !candidate.chars().any(char::is_lowercase) {
        return Err(WordError::NotLowercase);
    }

    Ok(())
}

/// Whether a candidate is a well-formed word as given
///
/// # Examples
/// ```
/// use wordle_curator::core::is_valid_word;
///
/// assert!(is_valid_word("crane"));
/// assert!(!is_valid_word("Crane"));
/// assert!(!is_valid_word("cran3"));
/// assert!(!is_valid_word("cranes"));
/// ```
#[must_use]
pub fn is_valid_word(candidate: &str) -> bool {
    validate(candidate).is_ok()
}

impl Word {
    /// Normalize a raw line and validate it
    ///
    /// Surrounding whitespace is trimmed and the text lowercased before the
    /// checks run, so `"  CRANE\n"` becomes `crane`.
    ///
    /// # Errors
    /// Returns `WordError` if the normalized text is not a five-letter
    /// lowercase word.
    ///
    /// # Examples
    /// ```
    /// use wordle_curator::core::Word;
    ///
    /// let word = Word::new(" Crane ").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("o'neil").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self, WordError> {
        let text = raw.trim().to_lowercase();
        validate(&text)?;
        Ok(Self(text))
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
