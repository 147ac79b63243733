use serde::Serialize;

use crate::output::output_tabular::{Field, TableFormat};
use crate::search::Score;

/// A pairing of an upstream motif occurrence with a
/// downstream motif occurrence that starts after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// The 0-based start of the upstream motif
    pub upstream: usize,
    /// The 0-based start of the downstream motif
    pub downstream: usize,
    /// The number of bases between the end of the upstream
    /// motif and the start of the downstream motif. This is
    /// negative when the two motifs overlap.
    pub gap: isize,
    pub score: Score,
}

impl Candidate {
    pub fn field_string(&self, number: usize, field: &Field) -> String {
        match field {
            Field::Number => number.to_string(),
            Field::UpstreamStart => self.upstream.to_string(),
            Field::DownstreamStart => self.downstream.to_string(),
            Field::GapLength => self.gap.to_string(),
            Field::Score => self.score.to_string(),
        }
    }

    /// Produce a table row for this candidate, padded to the table format's widths.
    ///
    /// `number` is the 1-based position of the candidate in the result list.
    pub fn tab_string_formatted(&self, number: usize, format: &TableFormat) -> String {
        let mut tokens: Vec<String> = format
            .fields
            .iter()
            .zip(format.widths.iter())
            .map(|(field, &width)| {
                format!("{:>width$}", self.field_string(number, field), width = width)
            })
            .collect();

        // the first column is left aligned under the "# "
        if let (Some(first), Some(field)) = (tokens.first_mut(), format.fields.first()) {
            *first = format!(
                "{:<width$}",
                self.field_string(number, field),
                width = format.widths[0]
            );
        }

        tokens.join(" ")
    }
}
