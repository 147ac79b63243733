use std::io::Write;

use libpromoter::search::PromoterFinder;
use libpromoter::structs::Sequence;

use crate::args::ScanArgs;
use crate::stats::{CountedValue, SequenceStats, Stats};
use crate::util::{check_writable, read_input, resolve_input_path, writer_for, PathBufExt};

use super::OutputStep;

/// Scan every sequence, handing each result to the output step.
pub fn scan_sequences<W: Write>(
    sequences: &[Sequence],
    finder: &PromoterFinder,
    output: &mut OutputStep<W>,
    stats: &mut Stats,
) -> anyhow::Result<()> {
    for sequence in sequences {
        if sequence.dropped_byte_count > 0 {
            log::debug!(
                "dropped {} non-nucleotide bytes from sequence {:?}",
                sequence.dropped_byte_count,
                sequence.name
            );
        }

        if sequence.is_empty() {
            log::warn!("sequence {:?} contains no nucleotides", sequence.name);
        }

        let result = finder.scan(&sequence.utf8_bytes);

        log::debug!(
            "{} occurrence(s) of {}, {} occurrence(s) of {}",
            result.upstream_positions.len(),
            finder.motifs.upstream,
            result.downstream_positions.len(),
            finder.motifs.downstream,
        );

        stats.add_sequence(&SequenceStats::from_scan(sequence, &result)?);
        output.write(sequence, &finder.motifs, &result)?;
    }

    Ok(())
}

/// Split raw input bytes into cleaned sequences, counting the input size.
pub fn parse_input(bytes: &[u8], stats: &mut Stats) -> anyhow::Result<Vec<Sequence>> {
    stats.add_count(CountedValue::InputBytes, bytes.len());

    let sequences = Sequence::from_input_bytes(bytes)?;
    log::info!(
        "scanning {} sequence(s), {} bases total",
        sequences.len(),
        sequences.iter().map(|s| s.length).sum::<usize>()
    );

    Ok(sequences)
}

pub fn scan(args: &ScanArgs) -> anyhow::Result<()> {
    let allow_overwrite = args.common_args.allow_overwrite;

    // refuse early, but don't create anything until the scan has worked
    for path in [&args.output_args.output_path, &args.output_args.stats_path]
        .into_iter()
        .flatten()
    {
        check_writable(path, allow_overwrite)?;
    }

    let input_path = resolve_input_path(args.input_args.input_path.as_ref())?;
    let bytes = read_input(&input_path)?;

    let finder = PromoterFinder::default();
    let mut stats = Stats::new(&finder.scoring.possible_scores());
    let sequences = parse_input(&bytes, &mut stats)?;

    let color = !args.output_args.no_color && args.output_args.output_path.is_none();
    let writer = writer_for(args.output_args.output_path.as_ref(), allow_overwrite)?;
    let mut output =
        OutputStep::new(writer, args.output_args.format, color)?.with_top(args.output_args.top);

    log::debug!("writing {} output", args.output_args.format);

    scan_sequences(&sequences, &finder, &mut output, &mut stats)?;
    output.finish()?;

    log::info!(
        "found {} promoter candidate(s)",
        stats.count(CountedValue::Candidates)
    );

    if let Some(path) = &args.output_args.stats_path {
        let mut writer = path.open(allow_overwrite)?;
        stats.write(&mut writer)?;
        writer.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{InputArgs, OutputFormat, ScanOutputArgs};
    use crate::util::FileExistsError;
    use assert2::{assert, check, let_assert};
    use std::path::Path;

    const EXAMPLE: &[u8] = b"TTGACACCCCCCCCCCCCCCCCTATAATTTGACACCCCCCCCCCCCCTATAAT";

    fn scan_to_string(bytes: &[u8], stats: &mut Stats) -> anyhow::Result<String> {
        let finder = PromoterFinder::default();
        let mut output = OutputStep::new(vec![], OutputFormat::Text, false)?;

        let sequences = parse_input(bytes, stats)?;
        scan_sequences(&sequences, &finder, &mut output, stats)?;

        Ok(String::from_utf8(output.finish()?)?)
    }

    fn file_args(dir: &Path) -> ScanArgs {
        ScanArgs {
            input_args: InputArgs {
                input_path: Some(dir.join("input.txt")),
            },
            output_args: ScanOutputArgs {
                output_path: Some(dir.join("output.txt")),
                format: OutputFormat::Text,
                top: None,
                no_color: false,
                stats_path: Some(dir.join("stats.txt")),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_scan_lowercase_input() -> anyhow::Result<()> {
        let mut stats = Stats::new(&PromoterFinder::default().scoring.possible_scores());

        let mut raw = EXAMPLE.to_ascii_lowercase();
        raw.extend_from_slice(b"\n\n");
        let text = scan_to_string(&raw, &mut stats)?;

        check!(text.contains("  1. upstream: 0, downstream: 22, gap: 16, score: 100"));
        check!(text.contains("  2. upstream: 0, downstream: 47, gap: 41, score: 40"));
        check!(text.contains("  3. upstream: 28, downstream: 47, gap: 13, score: 60"));
        check!(stats.count(CountedValue::InputBytes) == EXAMPLE.len() + 2);
        check!(stats.count(CountedValue::Candidates) == 3);
        Ok(())
    }

    #[test]
    fn test_scan_upstream_only() -> anyhow::Result<()> {
        let mut stats = Stats::new(&PromoterFinder::default().scoring.possible_scores());

        let text = scan_to_string(b"CCTTGACACC", &mut stats)?;

        check!(text.contains("0 promoter candidates found"));
        check!(stats.count(CountedValue::UpstreamOccurrences) == 1);
        check!(stats.count(CountedValue::Candidates) == 0);
        Ok(())
    }

    #[test]
    fn test_scan_files() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let args = file_args(dir.path());
        std::fs::write(dir.path().join("input.txt"), EXAMPLE)?;

        scan(&args)?;

        let text = std::fs::read_to_string(dir.path().join("output.txt"))?;
        // writing to a file never colors the marker line
        check!(!text.contains("\u{1b}["));
        check!(text.contains("3 promoter candidate(s) found:"));

        let stats = std::fs::read_to_string(dir.path().join("stats.txt"))?;
        check!(stats.contains("candidates 3"));

        // a second run needs permission to overwrite the report
        let_assert!(Err(err) = scan(&args));
        let_assert!(Some(exists) = err.downcast_ref::<FileExistsError>());
        check!(exists.path.ends_with("output.txt"));

        let overwrite_args = ScanArgs {
            common_args: crate::args::CommonArgs {
                allow_overwrite: true,
            },
            ..args
        };
        check!(scan(&overwrite_args).is_ok());
        Ok(())
    }

    #[test]
    fn test_failed_scan_leaves_no_files() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let args = file_args(dir.path());

        // the input doesn't exist yet
        let_assert!(Err(err) = scan(&args));
        check!(format!("{err}").starts_with("failed to read sequence file"));
        check!(!dir.path().join("output.txt").exists());
        check!(!dir.path().join("stats.txt").exists());

        // the same arguments work once the input is there
        std::fs::write(dir.path().join("input.txt"), EXAMPLE)?;
        scan(&args)?;

        let stats = std::fs::read_to_string(dir.path().join("stats.txt"))?;
        check!(stats.contains("candidates 3"));
        Ok(())
    }

    #[test]
    fn test_scan_csv_with_top() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let mut args = file_args(dir.path());
        args.output_args.format = OutputFormat::Csv;
        args.output_args.stats_path = None;
        std::fs::write(dir.path().join("input.txt"), EXAMPLE)?;

        scan(&args)?;

        let text = std::fs::read_to_string(dir.path().join("output.txt"))?;
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines.len() == 4);
        check!(lines[0] == "sequence,number,upstream,downstream,gap,score");
        check!(lines[2] == ",2,0,47,41,40");
        Ok(())
    }

    #[test]
    fn test_scan_missing_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let args = ScanArgs {
            input_args: InputArgs {
                input_path: Some(dir.path().join("missing.txt")),
            },
            ..Default::default()
        };
        assert!(scan(&args).is_err());
        Ok(())
    }
}
