//! Priority merge of scored wordlists
//!
//! Every word keeps the highest score of any source that contains it. The
//! merge never downgrades, so the final table does not depend on the order
//! the fragments are folded in.

use crate::core::{Score, Word};
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// Outcome of inserting one word into a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The word was not in the table yet
    Added,
    /// The word was present with a strictly lower score
    Upgraded,
    /// The word was present with an equal or higher score
    Kept,
}

/// Counts of insertion outcomes for one merged fragment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub added: usize,
    pub upgraded: usize,
    pub kept: usize,
}

impl MergeStats {
    fn record(&mut self, insertion: Insertion) {
        match insertion {
            Insertion::Added => self.added += 1,
            Insertion::Upgraded => self.upgraded += 1,
            Insertion::Kept => self.kept += 1,
        }
    }

    /// Total words seen in the fragment
    #[must_use]
    pub const fn total(&self) -> usize {
        self.added + self.upgraded + self.kept
    }
}

/// Mapping from word to its best priority score
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordScoreTable {
    scores: FxHashMap<Word, Score>,
}

impl WordScoreTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fragment assigning `score` to every word
    ///
    /// Duplicate words collapse to one entry.
    pub fn from_words(words: impl IntoIterator<Item = Word>, score: Score) -> Self {
        let mut table = Self::new();
        for word in words {
            table.insert(word, score);
        }
        table
    }

    /// Insert a word, overwriting only when `score` is strictly greater
    pub fn insert(&mut self, word: Word, score: Score) -> Insertion {
        match self.scores.entry(word) {
            Entry::Vacant(entry) => {
                entry.insert(score);
                Insertion::Added
            }
            Entry::Occupied(mut entry) if score > *entry.get() => {
                entry.insert(score);
                Insertion::Upgraded
            }
            Entry::Occupied(_) => Insertion::Kept,
        }
    }

    /// Fold another table into this one under the never-downgrade rule
    pub fn merge(&mut self, fragment: Self) -> MergeStats {
        let mut stats = MergeStats::default();
        for (word, score) in fragment.scores {
            stats.record(self.insert(word, score));
        }
        stats
    }

    #[must_use]
    pub fn score(&self, word: &str) -> Option<Score> {
        self.scores.get(word).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Word, Score)> {
        self.scores.iter().map(|(word, &score)| (word, score))
    }

    /// All entries ordered by descending score, then alphabetically
    #[must_use]
    pub fn ranked(&self) -> Vec<(&Word, Score)> {
        let mut entries: Vec<(&Word, Score)> = self.iter().collect();
        entries.sort_unstable_by(|(a_word, a_score), (b_word, b_score)| {
            b_score.cmp(a_score).then_with(|| a_word.cmp(b_word))
        });
        entries
    }
}

/// Fold fragments, in the given order, into a fresh table
///
/// Returns the table and the per-fragment merge statistics.
pub fn merge_fragments(
    fragments: impl IntoIterator<Item = WordScoreTable>,
) -> (WordScoreTable, Vec<MergeStats>) {
    let mut table = WordScoreTable::new();
    let stats = fragments
        .into_iter()
        .map(|fragment| table.merge(fragment))
        .collect();
    (table, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    fn fragment(texts: &[&str], score: Score) -> WordScoreTable {
        WordScoreTable::from_words(words(texts), score)
    }

    #[test]
    fn insert_never_downgrades() {
        let mut table = WordScoreTable::new();
        let word = Word::new("crane").unwrap();

        assert_eq!(table.insert(word.clone(), 90), Insertion::Added);
        assert_eq!(table.insert(word.clone(), 40), Insertion::Kept);
        assert_eq!(table.insert(word.clone(), 90), Insertion::Kept);
        assert_eq!(table.score("crane"), Some(90));

        assert_eq!(table.insert(word, 100), Insertion::Upgraded);
        assert_eq!(table.score("crane"), Some(100));
    }

    #[test]
    fn from_words_collapses_duplicates() {
        let table = fragment(&["crane", "crane", "slate"], 60);
        assert_eq!(table.len(), 2);
        assert_eq!(table.score("crane"), Some(60));
    }

    #[test]
    fn merge_two_sources_keeps_max() {
        let (table, stats) = merge_fragments([
            fragment(&["apple", "board"], 100),
            fragment(&["board", "crane"], 90),
        ]);

        assert_eq!(table.score("apple"), Some(100));
        assert_eq!(table.score("board"), Some(100));
        assert_eq!(table.score("crane"), Some(90));
        assert_eq!(table.len(), 3);

        assert_eq!(
            stats[1],
            MergeStats {
                added: 1,
                upgraded: 0,
                kept: 1
            }
        );
    }

    #[test]
    fn merge_out_of_order_still_keeps_max() {
        let (table, stats) = merge_fragments([
            fragment(&["board", "crane"], 90),
            fragment(&["apple", "board"], 100),
        ]);

        assert_eq!(table.score("board"), Some(100));
        assert_eq!(table.score("crane"), Some(90));
        assert_eq!(stats[1].upgraded, 1);
        assert_eq!(stats[1].total(), 2);
    }

    #[test]
    fn missing_word_has_no_score() {
        let table = fragment(&["apple"], 100);
        assert_eq!(table.score("zebra"), None);
        assert!(WordScoreTable::new().is_empty());
    }

    #[test]
    fn ranked_orders_by_score_then_alpha() {
        let (table, _) = merge_fragments([
            fragment(&["zesty", "apple"], 100),
            fragment(&["crane", "board"], 60),
        ]);

        let ranked: Vec<(&str, Score)> = table
            .ranked()
            .into_iter()
            .map(|(w, s)| (w.text(), s))
            .collect();
        assert_eq!(
            ranked,
            [("apple", 100), ("zesty", 100), ("board", 60), ("crane", 60)]
        );
    }

    fn word_strategy() -> impl Strategy<Value = String> {
        "[a-f]{5}"
    }

    fn sources_strategy() -> impl Strategy<Value = Vec<(Vec<String>, Score)>> {
        prop::collection::vec(
            (prop::collection::vec(word_strategy(), 0..12), 1u32..120),
            1..6,
        )
    }

    fn table_of<'a>(sources: impl Iterator<Item = &'a (Vec<String>, Score)>) -> WordScoreTable {
        let fragments: Vec<WordScoreTable> = sources
            .map(|(texts, score)| {
                WordScoreTable::from_words(texts.iter().map(|t| Word::new(t).unwrap()), *score)
            })
            .collect();
        merge_fragments(fragments).0
    }

    proptest! {
        #[test]
        fn final_score_is_max_over_sources(sources in sources_strategy()) {
            let table = table_of(sources.iter());

            for (word, score) in table.iter() {
                let expected = sources
                    .iter()
                    .filter(|(texts, _)| texts.iter().any(|t| t == word.text()))
                    .map(|(_, s)| *s)
                    .max();
                prop_assert_eq!(Some(score), expected);
            }

            let distinct: std::collections::HashSet<&String> =
                sources.iter().flat_map(|(texts, _)| texts).collect();
            prop_assert_eq!(table.len(), distinct.len());
        }

        #[test]
        fn fold_order_does_not_matter(sources in sources_strategy()) {
            prop_assert_eq!(table_of(sources.iter()), table_of(sources.iter().rev()));
        }
    }
}
