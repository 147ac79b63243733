use crate::structs::Candidate;

use anyhow::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Number,
    UpstreamStart,
    DownstreamStart,
    GapLength,
    Score,
}

pub const DEFAULT_COLUMNS: [Field; 5] = [
    Field::Number,
    Field::UpstreamStart,
    Field::DownstreamStart,
    Field::GapLength,
    Field::Score,
];

#[derive(Clone)]
pub struct TableFormat {
    pub fields: Vec<Field>,
    pub labels: Vec<Vec<String>>,
    pub min_widths: Vec<usize>,
    pub widths: Vec<usize>,
}

impl TableFormat {
    pub fn new(fields: &[Field]) -> anyhow::Result<Self> {
        let mut labels = vec![];
        let mut min_widths = vec![];
        let mut widths = vec![];

        // Field variant names are CamelCase; each capitalized word becomes one header row
        let label_regex =
            regex::Regex::new(r"[A-Z][a-z]*").context("failed to build field label regex")?;

        let label_fn = |field: &Field| -> anyhow::Result<(Vec<String>, usize)> {
            let variant_name = format!("{:?}", field);

            let (label_words, word_lengths): (Vec<_>, Vec<_>) = label_regex
                .find_iter(&variant_name)
                .map(|m| (m.as_str().to_lowercase(), m.len()))
                .unzip();

            let longest_word = *word_lengths
                .iter()
                .max()
                .context("field name has no label words")?;
            Ok((label_words, longest_word))
        };

        let first_field = fields.first().context("a table needs at least one field")?;

        // the "# " comment prefix lives in the first column
        let (first_words, first_width) = label_fn(first_field)?;
        labels.push(first_words);
        widths.push(first_width + 2);
        min_widths.push(first_width + 2);

        for field in fields.iter().skip(1) {
            let (words, width) = label_fn(field)?;
            labels.push(words);
            widths.push(width);
            min_widths.push(width);
        }

        Ok(Self {
            fields: fields.to_vec(),
            labels,
            min_widths,
            widths,
        })
    }

    /// Widen each column to fit the values of every candidate.
    pub fn update_widths(&mut self, candidates: &[Candidate]) {
        candidates.iter().enumerate().for_each(|(idx, candidate)| {
            self.fields
                .iter()
                .zip(self.widths.iter_mut())
                .for_each(|(field, width)| {
                    let value_width = candidate.field_string(idx + 1, field).len();
                    *width = (*width).max(value_width);
                });
        });
    }

    pub fn reset_widths(&mut self) {
        self.widths
            .iter_mut()
            .zip(self.min_widths.iter())
            .for_each(|(width, min_width)| *width = *min_width);
    }

    /// The header block: one row per label word, bottom aligned, then a row of dashes.
    pub fn header(&self) -> anyhow::Result<String> {
        let num_label_rows = self
            .labels
            .iter()
            .map(|words| words.len())
            .max()
            .context("table has no field labels")?;

        let mut rows: Vec<String> = vec!["# ".to_string(); num_label_rows + 1];

        let mut append_column = |words: &[String], width: usize| {
            let blank_rows = num_label_rows - words.len();
            let cells = std::iter::repeat("")
                .take(blank_rows)
                .chain(words.iter().map(|w| w.as_str()));

            rows.iter_mut().zip(cells).for_each(|(row, cell)| {
                row.push_str(&format!("{:width$} ", cell, width = width));
            });

            if let Some(dash_row) = rows.last_mut() {
                dash_row.push_str(&format!("{} ", "-".repeat(width)));
            }
        };

        self.labels
            .iter()
            .zip(self.widths.iter())
            .enumerate()
            .for_each(|(idx, (words, &width))| match idx {
                // the "# " prefix already takes two characters of the first column
                0 => append_column(words.as_slice(), width - 2),
                _ => append_column(words.as_slice(), width),
            });

        Ok(rows
            .iter()
            .map(|row| row.trim_end())
            .collect::<Vec<_>>()
            .join("\n"))
    }

    /// Render a full table: the header followed by one row per candidate.
    pub fn table(&mut self, candidates: &[Candidate]) -> anyhow::Result<String> {
        self.reset_widths();
        self.update_widths(candidates);

        let mut rows = vec![self.header()?];

        candidates
            .iter()
            .enumerate()
            .for_each(|(idx, candidate)| rows.push(candidate.tab_string_formatted(idx + 1, self)));

        Ok(rows.join("\n"))
    }
}
