//! Premium and daily lists built from the three highest-trust sources
//!
//! Unlike the priority merge this pipeline works on plain sets: the premium
//! list is the union of the two best sources plus words the second and third
//! sources agree on, and the daily list is a capped selection that prefers
//! words validated by several sources.

use super::BoundedList;
use crate::core::Word;
use rustc_hash::FxHashSet;

/// Default size of the daily list
pub const DAILY_CAP: usize = 3000;

/// Word set of a single source
pub type WordSet = FxHashSet<Word>;

/// The three sources feeding the premium pipeline, best first
#[derive(Debug, Clone, Default)]
pub struct PremiumSources {
    /// Wordle answers
    pub top1: WordSet,
    /// Google common words
    pub top2: WordSet,
    /// Stanford Graph Base
    pub third: WordSet,
}

/// Pairwise and triple intersections between the premium sources
#[derive(Debug, Clone, Default)]
pub struct SourceOverlaps {
    pub top1_top2: WordSet,
    pub top1_third: WordSet,
    pub top2_third: WordSet,
    pub all_three: WordSet,
}

fn intersect(a: &WordSet, b: &WordSet) -> WordSet {
    a.intersection(b).cloned().collect()
}

fn sorted<'a>(words: impl IntoIterator<Item = &'a Word>) -> Vec<Word> {
    let mut out: Vec<Word> = words.into_iter().cloned().collect();
    out.sort_unstable();
    out
}

impl PremiumSources {
    #[must_use]
    pub fn new(top1: WordSet, top2: WordSet, third: WordSet) -> Self {
        Self { top1, top2, third }
    }

    #[must_use]
    pub fn overlaps(&self) -> SourceOverlaps {
        let top1_top2 = intersect(&self.top1, &self.top2);
        let all_three = intersect(&top1_top2, &self.third);

        SourceOverlaps {
            top1_third: intersect(&self.top1, &self.third),
            top2_third: intersect(&self.top2, &self.third),
            top1_top2,
            all_three,
        }
    }

    fn top_union(&self) -> WordSet {
        self.top1.union(&self.top2).cloned().collect()
    }

    /// Union of the top two sources plus the second∩third agreement, sorted
    #[must_use]
    pub fn premium(&self) -> Vec<Word> {
        let mut words = self.top_union();
        words.extend(self.top2.intersection(&self.third).cloned());
        sorted(&words)
    }

    /// Capped daily list
    ///
    /// When the top two sources together fit in `cap` the daily list is simply
    /// their sorted union. Otherwise it is filled group by group, each group
    /// alphabetical: words in all three sources, then words in both top
    /// sources, then the rest of the first source, then the rest of the second,
    /// stopping at exactly `cap` entries.
    #[must_use]
    pub fn daily(&self, cap: usize) -> Vec<Word> {
        let union = self.top_union();
        if union.len() <= cap {
            return sorted(&union);
        }

        let overlaps = self.overlaps();
        let mut daily = BoundedList::new(cap);
        daily.extend(sorted(&overlaps.all_three));
        daily.extend(sorted(&overlaps.top1_top2));
        daily.extend(sorted(&self.top1));
        daily.extend(sorted(&self.top2));
        daily.into_vec()
    }
}
