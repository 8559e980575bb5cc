//! Tier partitioning of a merged score table

use super::WordScoreTable;
use crate::core::{Score, Tier, Word};

/// Words admitted to one tier, best first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierList {
    pub tier: Tier,
    pub words: Vec<Word>,
}

impl TierList {
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Split a table into one list per tier
///
/// Each list holds every word whose score reaches the tier threshold, ordered
/// by descending score and then alphabetically. Because the same ranking is
/// filtered by threshold, a stricter tier is always a prefix of a looser one.
#[must_use]
pub fn partition(table: &WordScoreTable, tiers: &[Tier]) -> Vec<TierList> {
    let ranked = table.ranked();

    tiers
        .iter()
        .map(|&tier| TierList {
            tier,
            words: admitted(&ranked, tier),
        })
        .collect()
}

fn admitted(ranked: &[(&Word, Score)], tier: Tier) -> Vec<Word> {
    ranked
        .iter()
        .filter(|(_, score)| tier.admits(*score))
        .map(|(word, _)| (*word).clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curation::merge_fragments;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn fragment(texts: &[&str], score: Score) -> WordScoreTable {
        WordScoreTable::from_words(texts.iter().map(|t| Word::new(t).unwrap()), score)
    }

    fn texts(list: &TierList) -> Vec<&str> {
        list.words.iter().map(Word::text).collect()
    }

    #[test]
    fn two_source_scenario() {
        let (table, _) = merge_fragments([
            fragment(&["apple", "board"], 100),
            fragment(&["board", "crane"], 90),
        ]);

        let lists = partition(&table, &[Tier::new("top", 95), Tier::new("wide", 80)]);

        assert_eq!(texts(&lists[0]), ["apple", "board"]);
        assert_eq!(texts(&lists[1]), ["apple", "board", "crane"]);
    }

    #[test]
    fn higher_score_sorts_before_alphabet() {
        let (table, _) = merge_fragments([
            fragment(&["zesty"], 100),
            fragment(&["abbey", "crane"], 60),
            fragment(&["aahed"], 40),
        ]);

        let lists = partition(&table, &Tier::STANDARD);

        assert_eq!(texts(&lists[0]), ["zesty"]);
        assert_eq!(texts(&lists[1]), ["zesty", "abbey", "crane"]);
        assert_eq!(texts(&lists[2]), ["zesty", "abbey", "crane", "aahed"]);
    }

    #[test]
    fn empty_table_gives_empty_tiers() {
        let lists = partition(&WordScoreTable::new(), &Tier::STANDARD);
        assert_eq!(lists.len(), 3);
        assert!(lists.iter().all(TierList::is_empty));
    }

    proptest! {
        #[test]
        fn tiers_nest(entries in prop::collection::vec(("[a-d]{5}", 0u32..=100), 0..40)) {
            let mut table = WordScoreTable::new();
            for (text, score) in &entries {
                table.insert(Word::new(text).unwrap(), *score);
            }

            let lists = partition(&table, &Tier::STANDARD);

            for pair in lists.windows(2) {
                let stricter: HashSet<&Word> = pair[0].words.iter().collect();
                let looser: HashSet<&Word> = pair[1].words.iter().collect();
                prop_assert!(stricter.is_subset(&looser));
                prop_assert_eq!(&pair[1].words[..pair[0].len()], &pair[0].words[..]);
            }

            for list in &lists {
                for word in &list.words {
                    let score = table.score(word.text());
                    prop_assert!(score.is_some_and(|s| list.tier.admits(s)));
                }
            }
        }
    }
}
