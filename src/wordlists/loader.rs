//! Word list loading utilities
//!
//! Reads source files line by line, normalizing and validating each entry.
//! A missing source is not an error: it is reported once on stderr and
//! contributes nothing.

use crate::core::{Score, Word};
use crate::curation::{WordScoreTable, WordSet};
use crate::output::print_missing_source;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Words read from one source, plus whether the file existed
#[derive(Debug, Clone, Default)]
pub struct Loaded<T> {
    pub words: T,
    pub found: bool,
}

impl<T: Default> Loaded<T> {
    fn missing() -> Self {
        Self {
            words: T::default(),
            found: false,
        }
    }
}

/// Load words from a file
///
/// Returns every valid word in file order, skipping malformed lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read, including when
/// it does not exist.
///
/// # Examples
/// ```no_run
/// use wordle_curator::wordlists::loader::load_from_file;
///
/// let words = load_from_file("sgb_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let reader = BufReader::new(File::open(path)?);

    let mut words = Vec::new();
    for line in reader.lines() {
        if let Ok(word) = Word::new(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Convert raw lines to words, dropping malformed ones
///
/// # Examples
/// ```
/// use wordle_curator::wordlists::loader::words_from_lines;
///
/// let words = words_from_lines(["crane", "Slate ", "toolong", "ab1de"]);
/// assert_eq!(words.len(), 2);
/// ```
pub fn words_from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<Word> {
    lines
        .into_iter()
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

fn load_tolerant(path: &Path) -> io::Result<Option<Vec<Word>>> {
    match load_from_file(path) {
        Ok(words) => Ok(Some(words)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            print_missing_source(path);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Load a source as a plain word set
///
/// # Errors
///
/// Returns an I/O error for any failure other than the file being missing.
pub fn load_set<P: AsRef<Path>>(path: P) -> io::Result<Loaded<WordSet>> {
    Ok(match load_tolerant(path.as_ref())? {
        Some(words) => Loaded {
            words: words.into_iter().collect(),
            found: true,
        },
        None => Loaded::missing(),
    })
}

/// Load a source as a score table fragment, every word tagged with `score`
///
/// # Errors
///
/// Returns an I/O error for any failure other than the file being missing.
pub fn load_scored<P: AsRef<Path>>(path: P, score: Score) -> io::Result<Loaded<WordScoreTable>> {
    Ok(match load_tolerant(path.as_ref())? {
        Some(words) => Loaded {
            words: WordScoreTable::from_words(words, score),
            found: true,
        },
        None => Loaded::missing(),
    })
}
