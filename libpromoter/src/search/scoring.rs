use std::fmt::{Display, Formatter};

use serde::Serialize;

/// The points awarded to a promoter candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Score(u32);

impl Score {
    pub const fn new(points: u32) -> Self {
        Score(points)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An inclusive range of gap distances and the score it earns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ScoreBucket {
    pub min_gap: isize,
    pub max_gap: isize,
    pub score: Score,
}

impl ScoreBucket {
    pub const fn new(min_gap: isize, max_gap: isize, points: u32) -> Self {
        Self {
            min_gap,
            max_gap,
            score: Score::new(points),
        }
    }

    pub fn contains(&self, gap: isize) -> bool {
        (self.min_gap..=self.max_gap).contains(&gap)
    }
}

/// Gap windows around the preferred 17bp spacer, tightest first.
pub const DEFAULT_SCORE_BUCKETS: [ScoreBucket; 3] = [
    ScoreBucket::new(16, 19, 100),
    ScoreBucket::new(14, 21, 80),
    ScoreBucket::new(12, 23, 60),
];

pub const DEFAULT_FALLBACK_SCORE: Score = Score::new(40);

fn score_from_buckets(buckets: &[ScoreBucket], fallback: Score, gap: isize) -> Score {
    buckets
        .iter()
        .find(|bucket| bucket.contains(gap))
        .map_or(fallback, |bucket| bucket.score)
}

/// Maps a gap distance to a score. The buckets are checked
/// in order and the first one that contains the gap wins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScoringConfig {
    pub buckets: Vec<ScoreBucket>,
    /// The score for any gap that lands in none of the buckets
    pub fallback: Score,
}

impl ScoringConfig {
    pub fn score(&self, gap: isize) -> Score {
        score_from_buckets(&self.buckets, self.fallback, gap)
    }

    /// Every score this config can produce, highest first.
    pub fn possible_scores(&self) -> Vec<Score> {
        let mut scores: Vec<Score> = self
            .buckets
            .iter()
            .map(|b| b.score)
            .chain(std::iter::once(self.fallback))
            .collect();
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores.dedup();
        scores
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            buckets: DEFAULT_SCORE_BUCKETS.to_vec(),
            fallback: DEFAULT_FALLBACK_SCORE,
        }
    }
}

/// Score a gap distance with the default buckets.
pub fn simple_gap_score(gap: isize) -> Score {
    score_from_buckets(&DEFAULT_SCORE_BUCKETS, DEFAULT_FALLBACK_SCORE, gap)
}
