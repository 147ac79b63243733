use std::fmt::{Display, Formatter, Write};

use crate::alphabet::{FILLER, MARKER};
use crate::search::{best_candidates, ScanResult};
use crate::structs::{Candidate, MotifConfig};

/// Build a line the same length as the sequence with every position
/// covered by a motif occurrence set to the marker byte.
///
/// `occurrences` pairs a list of motif start positions with that motif's length.
pub fn marker_line(sequence_length: usize, occurrences: &[(&[usize], usize)]) -> String {
    let mut markers = vec![FILLER; sequence_length];

    occurrences.iter().for_each(|(positions, motif_length)| {
        positions.iter().for_each(|&start| {
            let end = (start + motif_length).min(sequence_length);
            if start < end {
                markers[start..end].fill(MARKER);
            }
        });
    });

    // both marker bytes are ASCII
    String::from_utf8(markers).unwrap_or_default()
}

/// The human readable report for one scanned sequence.
pub struct Report<'a> {
    pub sequence: &'a [u8],
    pub motifs: &'a MotifConfig,
    pub upstream_positions: &'a [usize],
    pub downstream_positions: &'a [usize],
    pub candidates: &'a [Candidate],
}

impl<'a> Report<'a> {
    pub fn from_scan(sequence: &'a [u8], motifs: &'a MotifConfig, scan: &'a ScanResult) -> Self {
        Self {
            sequence,
            motifs,
            upstream_positions: &scan.upstream_positions,
            downstream_positions: &scan.downstream_positions,
            candidates: &scan.candidates,
        }
    }

    /// The motif counts and the numbered candidate list.
    pub fn summary(&self) -> String {
        let mut summary = String::new();

        // writing to a String can't fail
        let _ = writeln!(
            summary,
            "upstream motif {}: {} occurrence(s)",
            self.motifs.upstream,
            self.upstream_positions.len()
        );
        let _ = writeln!(
            summary,
            "downstream motif {}: {} occurrence(s)",
            self.motifs.downstream,
            self.downstream_positions.len()
        );

        if self.candidates.is_empty() {
            let _ = write!(summary, "0 promoter candidates found");
            return summary;
        }

        let _ = write!(
            summary,
            "{} promoter candidate(s) found:",
            self.candidates.len()
        );

        let number_width = self.candidates.len().to_string().len();

        self.candidates
            .iter()
            .enumerate()
            .for_each(|(idx, candidate)| {
                let _ = write!(
                    summary,
                    "\n  {:>number_width$}. upstream: {}, downstream: {}, gap: {}, score: {}",
                    idx + 1,
                    candidate.upstream,
                    candidate.downstream,
                    candidate.gap,
                    candidate.score,
                    number_width = number_width,
                );
            });

        summary
    }

    /// The `count` highest scoring candidates, best first. Each line ends
    /// with the candidate's number in the full list.
    pub fn best_summary(&self, count: usize) -> String {
        let best = best_candidates(self.candidates, count);
        let mut summary = format!("best {} candidate(s) by score:", best.len());

        let rank_width = best.len().to_string().len();

        best.iter()
            .enumerate()
            .for_each(|(rank, (number, candidate))| {
                let _ = write!(
                    summary,
                    "\n  {:>rank_width$}. upstream: {}, downstream: {}, gap: {}, score: {} (#{})",
                    rank + 1,
                    candidate.upstream,
                    candidate.downstream,
                    candidate.gap,
                    candidate.score,
                    number,
                    rank_width = rank_width,
                );
            });

        summary
    }

    pub fn sequence_line(&self) -> &str {
        std::str::from_utf8(self.sequence).unwrap_or_default()
    }

    pub fn marker_line(&self) -> String {
        marker_line(
            self.sequence.len(),
            &[
                (self.upstream_positions, self.motifs.upstream.len()),
                (self.downstream_positions, self.motifs.downstream.len()),
            ],
        )
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.summary())?;

        if !self.sequence.is_empty() {
            write!(f, "\n\n{}\n{}", self.sequence_line(), self.marker_line())?;
        }

        Ok(())
    }
}

/// Render the report for a sequence, its upstream and downstream motif occurrences, and
/// the candidates built from them. The inputs are not checked against each other.
pub fn output(
    sequence: &[u8],
    motifs: &MotifConfig,
    upstream_positions: &[usize],
    downstream_positions: &[usize],
    candidates: &[Candidate],
) -> String {
    Report {
        sequence,
        motifs,
        upstream_positions,
        downstream_positions,
        candidates,
    }
    .to_string()
}
