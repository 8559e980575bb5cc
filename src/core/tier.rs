//! Output tiers of the priority-merge pipeline

use super::Score;

/// A named output bucket holding every word scored at or above `min_score`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    pub name: &'static str,
    pub min_score: Score,
}

impl Tier {
    /// Wordle answers, Google common and Stanford words
    pub const HIGH: Self = Self::new("high", 80);
    /// Adds the Wordle allowed guesses
    pub const GOOD: Self = Self::new("good", 60);
    /// Everything, SOWPODS included
    pub const ALL: Self = Self::new("all", 40);

    /// The standard tiers, strictest first
    pub const STANDARD: [Self; 3] = [Self::HIGH, Self::GOOD, Self::ALL];

    #[must_use]
    pub const fn new(name: &'static str, min_score: Score) -> Self {
        Self { name, min_score }
    }

    #[inline]
    #[must_use]
    pub const fn admits(&self, score: Score) -> bool {
        score >= self.min_score
    }
}
