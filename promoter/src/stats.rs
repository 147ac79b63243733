use std::collections::BTreeMap;
use std::io::Write;

use derive_builder::Builder;
use libpromoter::search::{Score, ScanResult};
use libpromoter::structs::Sequence;
use strum::{EnumCount, EnumIter, IntoEnumIterator};

#[derive(Debug, Clone, Copy, EnumCount, EnumIter, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum CountedValue {
    Sequences,
    InputBytes,
    DroppedBytes,
    Bases,
    UpstreamOccurrences,
    DownstreamOccurrences,
    Candidates,
}

/// The counts collected while scanning a single sequence.
#[derive(Builder, Default, Debug)]
#[builder(default)]
pub struct SequenceStats {
    pub bases: usize,
    pub dropped_bytes: usize,
    pub upstream_occurrences: usize,
    pub downstream_occurrences: usize,
    pub candidates: usize,
    pub scores: Vec<Score>,
}

impl SequenceStats {
    pub fn from_scan(sequence: &Sequence, result: &ScanResult) -> anyhow::Result<Self> {
        Ok(SequenceStatsBuilder::default()
            .bases(sequence.length)
            .dropped_bytes(sequence.dropped_byte_count)
            .upstream_occurrences(result.upstream_positions.len())
            .downstream_occurrences(result.downstream_positions.len())
            .candidates(result.candidates.len())
            .scores(result.candidates.iter().map(|c| c.score).collect())
            .build()?)
    }
}

#[derive(Default, Debug)]
pub struct Stats {
    counts: [usize; CountedValue::COUNT],
    score_counts: BTreeMap<Score, usize>,
}

impl Stats {
    pub fn new(possible_scores: &[Score]) -> Self {
        Self {
            counts: [0; CountedValue::COUNT],
            score_counts: possible_scores.iter().map(|&s| (s, 0)).collect(),
        }
    }

    pub fn add_count(&mut self, value: CountedValue, count: usize) {
        self.counts[value as usize] += count;
    }

    pub fn increment_count(&mut self, value: CountedValue) {
        self.add_count(value, 1);
    }

    pub fn count(&self, value: CountedValue) -> usize {
        self.counts[value as usize]
    }

    pub fn score_count(&self, score: Score) -> usize {
        self.score_counts.get(&score).copied().unwrap_or(0)
    }

    pub fn add_sequence(&mut self, stats: &SequenceStats) {
        self.increment_count(CountedValue::Sequences);
        self.add_count(CountedValue::Bases, stats.bases);
        self.add_count(CountedValue::DroppedBytes, stats.dropped_bytes);
        self.add_count(
            CountedValue::UpstreamOccurrences,
            stats.upstream_occurrences,
        );
        self.add_count(
            CountedValue::DownstreamOccurrences,
            stats.downstream_occurrences,
        );
        self.add_count(CountedValue::Candidates, stats.candidates);

        stats
            .scores
            .iter()
            .for_each(|&score| *self.score_counts.entry(score).or_insert(0) += 1);
    }

    /// Write one `name value` line per statistic.
    pub fn write(&self, writer: &mut impl Write) -> anyhow::Result<()> {
        for value in CountedValue::iter() {
            writeln!(writer, "{} {}", value, self.count(value))?;
        }

        // highest score first
        for (score, count) in self.score_counts.iter().rev() {
            writeln!(writer, "score_{} {}", score, count)?;
        }

        Ok(())
    }
}
