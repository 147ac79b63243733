use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Subcommand)]
pub enum SubCommands {
    #[command(about = "Find and score -35/-10 motif pairs in a DNA sequence")]
    Scan(ScanArgs),
    #[command(about = "Strip whitespace and non-nucleotide characters and print the cleaned sequence")]
    Clean(CleanArgs),
}

#[derive(Parser)]
#[command(name = "promoter")]
#[command(
    about = "Scan a DNA sequence for TTGACA/TATAAT motif pairs and score them as prokaryotic promoter candidates"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: SubCommands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Allow promoter to overwrite files
    #[arg(short = 'q', long = "allow-overwrite", default_value_t = false)]
    pub allow_overwrite: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// The DNA sequence file (raw text or fasta). If omitted, you'll be asked for it
    #[arg(value_name = "DNA.[txt:fasta]")]
    pub input_path: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// A numbered candidate list followed by the sequence and its motif markers
    #[default]
    Text,
    /// A column-aligned candidate table followed by the sequence and its motif markers
    Table,
    /// Everything about the scan, as JSON
    Json,
    /// One comma separated row per candidate, with a header row
    Csv,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ScanOutputArgs {
    /// Where to write the report (default: stdout)
    #[arg(short = 'o', long = "output", value_name = "path")]
    pub output_path: Option<PathBuf>,

    /// The report format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// After the candidate list, also list the N highest scoring candidates
    #[arg(short = 't', long = "top", value_name = "N")]
    pub top: Option<usize>,

    /// Don't color the motif marker line
    #[arg(long = "no-color", action)]
    pub no_color: bool,

    /// Where to write run statistics
    #[arg(short = 'S', long = "stats-output", value_name = "path")]
    pub stats_path: Option<PathBuf>,
}

#[derive(Debug, Args, Clone, Default)]
pub struct ScanArgs {
    #[command(flatten)]
    pub input_args: InputArgs,

    /// Arguments that control output options
    #[command(flatten)]
    pub output_args: ScanOutputArgs,

    /// Arguments that are common across all promoter subcommands
    #[command(flatten)]
    pub common_args: CommonArgs,
}

#[derive(Debug, Args, Clone, Default)]
pub struct CleanArgs {
    #[command(flatten)]
    pub input_args: InputArgs,

    /// Where to write the cleaned sequence (default: stdout)
    #[arg(short = 'o', long = "output", value_name = "path")]
    pub output_path: Option<PathBuf>,

    /// Arguments that are common across all promoter subcommands
    #[command(flatten)]
    pub common_args: CommonArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};

    #[test]
    fn test_parse_scan() {
        let cli = Cli::parse_from(["promoter", "scan", "dna.txt", "-f", "table", "--no-color"]);
        let_assert!(SubCommands::Scan(args) = cli.command);
        check!(args.input_args.input_path == Some(PathBuf::from("dna.txt")));
        check!(args.output_args.format == OutputFormat::Table);
        check!(args.output_args.no_color);
        check!(!args.common_args.allow_overwrite);
    }

    #[test]
    fn test_parse_scan_without_input() {
        let cli = Cli::parse_from(["promoter", "scan"]);
        let_assert!(SubCommands::Scan(args) = cli.command);
        check!(args.input_args.input_path.is_none());
        check!(args.output_args.format == OutputFormat::Text);
    }

    #[test]
    fn test_parse_clean() {
        let cli = Cli::parse_from(["promoter", "clean", "dna.fa", "-o", "clean.txt", "-q"]);
        let_assert!(SubCommands::Clean(args) = cli.command);
        check!(args.output_path == Some(PathBuf::from("clean.txt")));
        check!(args.common_args.allow_overwrite);
    }

    #[test]
    fn test_parse_csv_with_top() {
        let cli = Cli::parse_from(["promoter", "scan", "dna.txt", "-f", "csv", "--top", "3"]);
        let_assert!(SubCommands::Scan(args) = cli.command);
        check!(args.output_args.format == OutputFormat::Csv);
        check!(args.output_args.top == Some(3));
    }

    #[test]
    fn test_format_display() {
        check!(OutputFormat::Json.to_string() == "json");
        check!(OutputFormat::Csv.to_string() == "csv");
    }
}
