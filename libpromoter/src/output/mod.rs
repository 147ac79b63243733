pub mod output_standard;
pub mod output_tabular;

use serde::Serialize;

use crate::search::{Score, ScanResult};
use crate::structs::{MotifConfig, Sequence};

/// The column names of a flat candidate row, in field order.
pub const CANDIDATE_ROW_HEADER: [&str; 6] =
    ["sequence", "number", "upstream", "downstream", "gap", "score"];

/// One candidate flattened into a row, tagged with the sequence it came from.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct CandidateRow<'a> {
    pub sequence: &'a str,
    pub number: usize,
    pub upstream: usize,
    pub downstream: usize,
    pub gap: isize,
    pub score: Score,
}

impl<'a> CandidateRow<'a> {
    /// One row per candidate, numbered from 1 in list order.
    pub fn from_scan(sequence: &'a Sequence, result: &ScanResult) -> Vec<Self> {
        result
            .candidates
            .iter()
            .enumerate()
            .map(|(idx, candidate)| CandidateRow {
                sequence: &sequence.name,
                number: idx + 1,
                upstream: candidate.upstream,
                downstream: candidate.downstream,
                gap: candidate.gap,
                score: candidate.score,
            })
            .collect()
    }
}

/// A serializable record of one scanned sequence.
#[derive(Serialize)]
pub struct SequenceScan<'a> {
    pub name: &'a str,
    pub details: Option<&'a str>,
    pub length: usize,
    pub sequence: &'a str,
    pub motifs: &'a MotifConfig,
    #[serde(flatten)]
    pub result: &'a ScanResult,
}

impl<'a> SequenceScan<'a> {
    pub fn new(sequence: &'a Sequence, motifs: &'a MotifConfig, result: &'a ScanResult) -> Self {
        Self {
            name: &sequence.name,
            details: sequence.details.as_deref(),
            length: sequence.length,
            sequence: sequence.as_str(),
            motifs,
            result,
        }
    }

    pub fn to_json(&self) -> anyhow::Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
