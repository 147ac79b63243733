use std::io::Write;

use colored::Colorize;
use libpromoter::{
    alphabet::MARKER,
    output::{
        output_standard::Report,
        output_tabular::{TableFormat, DEFAULT_COLUMNS},
        CandidateRow, SequenceScan, CANDIDATE_ROW_HEADER,
    },
    search::ScanResult,
    structs::{MotifConfig, Sequence},
};

use crate::args::OutputFormat;

/// Paint every run of marker characters red.
pub fn colorize_markers(marker_line: &str) -> String {
    let marker = char::from(MARKER);
    let mut colored_line = String::with_capacity(marker_line.len());
    let mut run = String::new();

    for c in marker_line.chars() {
        if c == marker {
            run.push(c);
            continue;
        }

        if !run.is_empty() {
            colored_line.push_str(&run.red().to_string());
            run.clear();
        }
        colored_line.push(c);
    }

    if !run.is_empty() {
        colored_line.push_str(&run.red().to_string());
    }

    colored_line
}

pub struct OutputStep<W: Write> {
    writer: W,
    format: OutputFormat,
    color: bool,
    table_format: TableFormat,
    json_records: Vec<serde_json::Value>,
    csv_writer: Option<csv::Writer<Vec<u8>>>,
    top: Option<usize>,
    num_written: usize,
}

impl<W: Write> OutputStep<W> {
    pub fn new(writer: W, format: OutputFormat, color: bool) -> anyhow::Result<Self> {
        let csv_writer = match format {
            OutputFormat::Csv => {
                let mut csv_writer = csv::WriterBuilder::new()
                    .has_headers(false)
                    .from_writer(vec![]);
                // written up front so a run without candidates still gets one
                csv_writer.write_record(CANDIDATE_ROW_HEADER)?;
                Some(csv_writer)
            }
            _ => None,
        };

        Ok(Self {
            writer,
            format,
            color,
            table_format: TableFormat::new(&DEFAULT_COLUMNS)?,
            json_records: vec![],
            csv_writer,
            top: None,
            num_written: 0,
        })
    }

    /// Also list the `top` highest scoring candidates of each sequence.
    pub fn with_top(mut self, top: Option<usize>) -> Self {
        self.top = top.filter(|&n| n > 0);
        self
    }

    pub fn write(
        &mut self,
        sequence: &Sequence,
        motifs: &MotifConfig,
        result: &ScanResult,
    ) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => {
                self.json_records
                    .push(SequenceScan::new(sequence, motifs, result).to_json()?);
                return Ok(());
            }
            OutputFormat::Csv => {
                if let Some(csv_writer) = self.csv_writer.as_mut() {
                    for row in CandidateRow::from_scan(sequence, result) {
                        csv_writer.serialize(row)?;
                    }
                }
                return Ok(());
            }
            OutputFormat::Text | OutputFormat::Table => {}
        }

        if self.num_written > 0 {
            writeln!(self.writer)?;
        }
        self.num_written += 1;

        if !sequence.name.is_empty() {
            write!(self.writer, ">{}", sequence.name)?;
            if let Some(details) = &sequence.details {
                write!(self.writer, " {details}")?;
            }
            writeln!(self.writer)?;
        }

        let report = Report::from_scan(&sequence.utf8_bytes, motifs, result);

        match self.format {
            OutputFormat::Table => {
                let table = self.table_format.table(&result.candidates)?;
                writeln!(self.writer, "{table}")?;
                if result.candidates.is_empty() {
                    writeln!(self.writer, "# 0 promoter candidates found")?;
                }
            }
            _ => writeln!(self.writer, "{}", report.summary())?,
        }

        if let Some(top) = self.top {
            if !result.candidates.is_empty() {
                writeln!(self.writer)?;
                writeln!(self.writer, "{}", report.best_summary(top))?;
            }
        }

        if !sequence.is_empty() {
            let marker_line = match self.color {
                true => colorize_markers(&report.marker_line()),
                false => report.marker_line(),
            };
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", report.sequence_line())?;
            writeln!(self.writer, "{}", marker_line)?;
        }

        Ok(())
    }

    /// Flush anything that can only be written once every sequence has been seen.
    pub fn finish(mut self) -> anyhow::Result<W> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.writer, &self.json_records)?;
                writeln!(self.writer)?;
            }
            OutputFormat::Csv => {
                if let Some(csv_writer) = self.csv_writer.take() {
                    let rows = csv_writer
                        .into_inner()
                        .map_err(|e| anyhow::anyhow!("failed to flush csv rows: {}", e.error()))?;
                    self.writer.write_all(&rows)?;
                }
            }
            OutputFormat::Text | OutputFormat::Table => {}
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{assert, check};
    use libpromoter::search::PromoterFinder;

    const EXAMPLE: &[u8] = b"TTGACACCCCCCCCCCCCCCCCTATAATTTGACACCCCCCCCCCCCCTATAAT";

    fn run(input: &[u8], format: OutputFormat) -> anyhow::Result<String> {
        run_with_top(input, format, None)
    }

    fn run_with_top(
        input: &[u8],
        format: OutputFormat,
        top: Option<usize>,
    ) -> anyhow::Result<String> {
        let finder = PromoterFinder::default();
        let mut step = OutputStep::new(vec![], format, false)?.with_top(top);
        for seq in Sequence::from_input_bytes(input)? {
            let result = finder.scan(&seq.utf8_bytes);
            step.write(&seq, &finder.motifs, &result)?;
        }
        Ok(String::from_utf8(step.finish()?)?)
    }

    #[test]
    fn test_colorize_markers() {
        colored::control::set_override(true);
        let line = colorize_markers("**__*");
        check!(line == format!("{}__{}", "**".red(), "*".red()));
        check!(line.contains("\u{1b}["));
        colored::control::unset_override();

        check!(colorize_markers("") == "");
    }

    #[test]
    fn test_text_output_for_fasta() -> anyhow::Result<()> {
        let text = run(
            b">p1 first\nTTGACACCCCCCCCCCCCCCCCTATAAT\n>p2\nCCCC\n",
            OutputFormat::Text,
        )?;
        let lines: Vec<&str> = text.lines().collect();

        check!(lines[0] == ">p1 first");
        check!(lines[3] == "1 promoter candidate(s) found:");
        check!(lines[4] == "  1. upstream: 0, downstream: 22, gap: 16, score: 100");
        check!(lines[6] == "TTGACACCCCCCCCCCCCCCCCTATAAT");
        check!(lines[7] == "******________________******");
        check!(lines[8] == "");
        check!(lines[9] == ">p2");
        check!(lines[12] == "0 promoter candidates found");
        check!(lines[14] == "CCCC");
        check!(lines[15] == "____");
        Ok(())
    }

    #[test]
    fn test_text_output_for_empty_input() -> anyhow::Result<()> {
        let text = run(b"", OutputFormat::Text)?;
        assert!(text.ends_with("0 promoter candidates found\n"));
        Ok(())
    }

    #[test]
    fn test_table_output() -> anyhow::Result<()> {
        let text = run(b"TTGACACCCCCCCCCCCCCCCCTATAAT", OutputFormat::Table)?;
        let lines: Vec<&str> = text.lines().collect();

        check!(lines[0].starts_with("#"));
        check!(lines[3] == "1               0         22     16   100");
        check!(lines[5] == "TTGACACCCCCCCCCCCCCCCCTATAAT");
        Ok(())
    }

    #[test]
    fn test_json_output() -> anyhow::Result<()> {
        let text = run(b">p1\nTTGACACCCCCCCCCCCCCCCCTATAAT\n>p2\nAC\n", OutputFormat::Json)?;
        let value: serde_json::Value = serde_json::from_str(&text)?;

        let records = value.as_array().expect("json output should be an array");
        assert!(records.len() == 2);
        check!(records[0]["name"] == "p1");
        check!(records[0]["candidates"][0]["score"] == 100);
        check!(records[1]["candidates"].as_array().map(|c| c.len()) == Some(0));
        Ok(())
    }

    #[test]
    fn test_csv_output() -> anyhow::Result<()> {
        let mut input = b">p1\n".to_vec();
        input.extend_from_slice(EXAMPLE);
        input.extend_from_slice(b"\n>p2\nCCCC\n>p3\nTTGACACCCCCCCCCCCCCCCCTATAAT\n");

        let text = run(&input, OutputFormat::Csv)?;
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines.len() == 5);
        check!(lines[0] == "sequence,number,upstream,downstream,gap,score");
        check!(lines[1] == "p1,1,0,22,16,100");
        check!(lines[3] == "p1,3,28,47,13,60");
        check!(lines[4] == "p3,1,0,22,16,100");
        Ok(())
    }

    #[test]
    fn test_csv_output_without_candidates() -> anyhow::Result<()> {
        let text = run(b"CCCC", OutputFormat::Csv)?;
        check!(text.lines().collect::<Vec<_>>() == vec!["sequence,number,upstream,downstream,gap,score"]);
        Ok(())
    }

    #[test]
    fn test_text_output_with_top() -> anyhow::Result<()> {
        let text = run_with_top(EXAMPLE, OutputFormat::Text, Some(2))?;
        let lines: Vec<&str> = text.lines().collect();

        // the full list stays in generator order
        check!(lines[3] == "  1. upstream: 0, downstream: 22, gap: 16, score: 100");
        check!(lines[4] == "  2. upstream: 0, downstream: 47, gap: 41, score: 40");
        check!(lines[5] == "  3. upstream: 28, downstream: 47, gap: 13, score: 60");
        check!(lines[6] == "");
        check!(lines[7] == "best 2 candidate(s) by score:");
        check!(lines[8] == "  1. upstream: 0, downstream: 22, gap: 16, score: 100 (#1)");
        check!(lines[9] == "  2. upstream: 28, downstream: 47, gap: 13, score: 60 (#3)");
        check!(lines[11].as_bytes() == EXAMPLE);
        Ok(())
    }

    #[test]
    fn test_top_is_skipped_without_candidates() -> anyhow::Result<()> {
        check!(
            run_with_top(b"CCTTGACACC", OutputFormat::Text, Some(3))?
                == run(b"CCTTGACACC", OutputFormat::Text)?
        );
        check!(
            run_with_top(EXAMPLE, OutputFormat::Text, Some(0))?
                == run(EXAMPLE, OutputFormat::Text)?
        );
        Ok(())
    }
}
