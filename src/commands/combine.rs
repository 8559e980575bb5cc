//! Priority-merge command
//!
//! Folds every source into one score table, best source first, then writes
//! the high/good/all tier lists.

use super::{CurateConfig, source_progress};
use crate::core::{Source, Tier};
use crate::curation::{MergeStats, TierList, WordScoreTable, partition};
use crate::wordlists::loader::load_scored;
use crate::wordlists::writer::write_to_file;
use std::fs;
use std::io;
use std::path::PathBuf;

/// How one source contributed to the merged table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    pub source: Source,
    pub found: bool,
    pub stats: MergeStats,
}

impl SourceReport {
    /// Distinct valid words read from the source
    #[must_use]
    pub const fn loaded(&self) -> usize {
        self.stats.total()
    }
}

/// Result of a combine run
pub struct CombineResult {
    pub sources: Vec<SourceReport>,
    pub total_unique: usize,
    pub tiers: Vec<TierList>,
    pub written: Vec<PathBuf>,
}

/// Merge all sources into tiers and write one file per tier
///
/// # Errors
///
/// Returns an I/O error if a present source cannot be read or an output file
/// cannot be written. Missing sources only produce a warning.
pub fn run_combine(config: &CurateConfig) -> io::Result<CombineResult> {
    let mut table = WordScoreTable::new();
    let mut sources = Vec::with_capacity(Source::PRIORITY_ORDER.len());

    let pb = source_progress(Source::PRIORITY_ORDER.len(), config.quiet);
    for source in Source::PRIORITY_ORDER {
        pb.set_message(source.label());
        let loaded = load_scored(config.source_path(source), source.priority())?;
        let stats = table.merge(loaded.words);
        sources.push(SourceReport {
            source,
            found: loaded.found,
            stats,
        });
        pb.inc(1);
    }
    pb.finish_and_clear();

    let tiers = partition(&table, &Tier::STANDARD);

    fs::create_dir_all(&config.out_dir)?;
    let mut written = Vec::with_capacity(tiers.len());
    for list in &tiers {
        let path = config.output_path(list.tier.name);
        write_to_file(&path, &list.words)?;
        written.push(path);
    }

    Ok(CombineResult {
        sources,
        total_unique: table.len(),
        tiers,
        written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn seed(dir: &TempDir, source: Source, words: &[&str]) {
        let mut content = words.join("\n");
        content.push('\n');
        fs::write(dir.path().join(source.file_name()), content).unwrap();
    }

    fn seed_all(dir: &TempDir) {
        seed(dir, Source::WordleAnswers, &["crane", "slate"]);
        seed(dir, Source::GoogleCommon, &["slate", "house", "Music"]);
        seed(dir, Source::StanfordGraphBase, &["house", "zonal"]);
        seed(dir, Source::WordleAllowed, &["crane", "aahed", "zonal"]);
        seed(dir, Source::Sowpods, &["aahed", "qajaq", "x-ray", "abcdef"]);
    }

    fn read(path: &std::path::Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    fn quiet(dir: &TempDir) -> CurateConfig {
        CurateConfig::new(dir.path()).quiet(true)
    }

    #[test]
    fn writes_nested_tiers() {
        let dir = TempDir::new().unwrap();
        seed_all(&dir);

        let result = run_combine(&quiet(&dir)).unwrap();

        assert_eq!(result.total_unique, 7);
        assert_eq!(result.written.len(), 3);
        assert_eq!(
            read(&result.written[0]),
            "crane\nslate\nhouse\nmusic\nzonal\n"
        );
        assert_eq!(
            read(&result.written[1]),
            "crane\nslate\nhouse\nmusic\nzonal\naahed\n"
        );
        assert_eq!(
            read(&result.written[2]),
            "crane\nslate\nhouse\nmusic\nzonal\naahed\nqajaq\n"
        );
    }

    #[test]
    fn reports_per_source_contribution() {
        let dir = TempDir::new().unwrap();
        seed_all(&dir);

        let result = run_combine(&quiet(&dir)).unwrap();
        let allowed = &result.sources[3];

        assert_eq!(allowed.source, Source::WordleAllowed);
        assert!(allowed.found);
        assert_eq!(allowed.loaded(), 3);
        assert_eq!(allowed.stats.added, 1);
        assert_eq!(allowed.stats.upgraded, 0);
    }

    #[test]
    fn missing_source_only_reduces_coverage() {
        let dir = TempDir::new().unwrap();
        seed_all(&dir);
        fs::remove_file(dir.path().join(Source::GoogleCommon.file_name())).unwrap();

        let result = run_combine(&quiet(&dir)).unwrap();

        assert!(!result.sources[1].found);
        assert_eq!(result.sources[1].loaded(), 0);
        assert_eq!(
            read(&result.written[0]),
            "crane\nslate\nhouse\nzonal\n"
        );
        assert_eq!(result.tiers[2].len(), 6);
    }

    #[test]
    fn no_sources_writes_empty_lists() {
        let dir = TempDir::new().unwrap();

        let result = run_combine(&quiet(&dir)).unwrap();

        assert_eq!(result.total_unique, 0);
        assert!(result.sources.iter().all(|s| !s.found));
        for path in &result.written {
            assert_eq!(read(path), "");
        }
    }

    #[test]
    fn rerun_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        seed_all(&dir);

        let first = run_combine(&quiet(&dir)).unwrap();
        let before: Vec<String> = first.written.iter().map(|p| read(p)).collect();
        let second = run_combine(&quiet(&dir)).unwrap();
        let after: Vec<String> = second.written.iter().map(|p| read(p)).collect();

        assert_eq!(before, after);
    }

    #[test]
    fn separate_out_dir_is_created() {
        let dir = TempDir::new().unwrap();
        seed_all(&dir);
        let out = dir.path().join("out");

        let result = run_combine(&quiet(&dir).with_out_dir(&out)).unwrap();

        assert!(result.written.iter().all(|p| p.starts_with(&out)));
        assert!(out.join("curated_5_letter_words_high.txt").exists());
    }
}
