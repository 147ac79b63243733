mod locate;
pub use locate::find_all_motif_occurrences;

mod scoring;
pub use scoring::{
    simple_gap_score, Score, ScoreBucket, ScoringConfig, DEFAULT_FALLBACK_SCORE,
    DEFAULT_SCORE_BUCKETS,
};

mod candidates;
pub use candidates::{
    best_candidates, find_all_promoter_candidates, pair_occurrences, PromoterFinder, ScanResult,
};
