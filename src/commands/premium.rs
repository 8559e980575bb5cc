//! Premium/daily command
//!
//! Builds the uncapped premium list and the capped daily list from the three
//! highest-trust sources.

use super::{CurateConfig, source_progress};
use crate::core::{Source, Word};
use crate::curation::{PremiumSources, SourceOverlaps, WordSet};
use crate::wordlists::loader::load_set;
use crate::wordlists::writer::write_to_file;
use crate::wordlists::{DAILY_LIST, PREMIUM_LIST};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Size of one loaded premium source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceCount {
    pub source: Source,
    pub found: bool,
    pub words: usize,
}

/// Result of a premium run
pub struct PremiumResult {
    pub sources: Vec<SourceCount>,
    pub overlaps: SourceOverlaps,
    pub premium: Vec<Word>,
    pub daily: Vec<Word>,
    pub daily_cap: usize,
    pub written: Vec<PathBuf>,
}

/// Build and write the premium and daily lists
///
/// # Errors
///
/// Returns an I/O error if a present source cannot be read or an output file
/// cannot be written. Missing sources only produce a warning.
pub fn run_premium(config: &CurateConfig) -> io::Result<PremiumResult> {
    let pb = source_progress(Source::PREMIUM.len(), config.quiet);

    let mut counts = Vec::with_capacity(Source::PREMIUM.len());
    let mut sets: Vec<WordSet> = Vec::with_capacity(Source::PREMIUM.len());
    for source in Source::PREMIUM {
        pb.set_message(source.label());
        let loaded = load_set(config.source_path(source))?;
        counts.push(SourceCount {
            source,
            found: loaded.found,
            words: loaded.words.len(),
        });
        sets.push(loaded.words);
        pb.inc(1);
    }
    pb.finish_and_clear();

    let mut sets = sets.into_iter();
    let sources = PremiumSources::new(
        sets.next().unwrap_or_default(),
        sets.next().unwrap_or_default(),
        sets.next().unwrap_or_default(),
    );

    let overlaps = sources.overlaps();
    let premium = sources.premium();
    let daily = sources.daily(config.daily_cap);

    fs::create_dir_all(&config.out_dir)?;
    let mut written = Vec::with_capacity(2);
    for (list, words) in [(PREMIUM_LIST, &premium), (DAILY_LIST, &daily)] {
        let path = config.output_path(list);
        write_to_file(&path, words)?;
        written.push(path);
    }

    Ok(PremiumResult {
        sources: counts,
        overlaps,
        premium,
        daily,
        daily_cap: config.daily_cap,
        written,
    })
}
