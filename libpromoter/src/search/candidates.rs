use std::cmp::Reverse;

use serde::Serialize;

use crate::search::{find_all_motif_occurrences, ScoringConfig};
use crate::structs::{Candidate, MotifConfig};

/// Pair every upstream occurrence with every downstream occurrence that starts after it.
///
/// Candidates come out in enumeration order: upstream positions ascending,
/// and for each upstream position, downstream positions ascending.
pub fn pair_occurrences(
    upstream_positions: &[usize],
    downstream_positions: &[usize],
    upstream_length: usize,
    scoring: &ScoringConfig,
) -> Vec<Candidate> {
    upstream_positions
        .iter()
        .flat_map(|&upstream| {
            downstream_positions
                .iter()
                .filter(move |&&downstream| downstream > upstream)
                .map(move |&downstream| {
                    let gap = downstream as isize - (upstream + upstream_length) as isize;
                    Candidate {
                        upstream,
                        downstream,
                        gap,
                        score: scoring.score(gap),
                    }
                })
        })
        .collect()
}

/// Everything a single scan of a sequence produces.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ScanResult {
    pub upstream_positions: Vec<usize>,
    pub downstream_positions: Vec<usize>,
    pub candidates: Vec<Candidate>,
}

/// Holds the motifs and the score buckets used to search a sequence.
#[derive(Clone, Debug, Default)]
pub struct PromoterFinder {
    pub motifs: MotifConfig,
    pub scoring: ScoringConfig,
}

impl PromoterFinder {
    pub fn new(motifs: MotifConfig, scoring: ScoringConfig) -> Self {
        Self { motifs, scoring }
    }

    pub fn scan(&self, sequence: &[u8]) -> ScanResult {
        let upstream_positions = find_all_motif_occurrences(sequence, &self.motifs.upstream);
        let downstream_positions = find_all_motif_occurrences(sequence, &self.motifs.downstream);

        let candidates = pair_occurrences(
            &upstream_positions,
            &downstream_positions,
            self.motifs.upstream.len(),
            &self.scoring,
        );

        ScanResult {
            upstream_positions,
            downstream_positions,
            candidates,
        }
    }

    pub fn find_candidates(&self, sequence: &[u8]) -> Vec<Candidate> {
        self.scan(sequence).candidates
    }
}

/// Find and score every promoter candidate using the consensus motifs and default scoring.
pub fn find_all_promoter_candidates(sequence: &[u8]) -> Vec<Candidate> {
    PromoterFinder::default().find_candidates(sequence)
}

/// The `count` highest scoring candidates, best first, each paired with its
/// 1-based number in the full list. Equal scores keep their list order.
pub fn best_candidates(candidates: &[Candidate], count: usize) -> Vec<(usize, &Candidate)> {
    let mut ranked: Vec<(usize, &Candidate)> = candidates
        .iter()
        .enumerate()
        .map(|(idx, candidate)| (idx + 1, candidate))
        .collect();

    // sort_by_key is stable
    ranked.sort_by_key(|(_, candidate)| Reverse(candidate.score));
    ranked.truncate(count);
    ranked
}
