use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use thiserror::Error;

/// File extensions we expect a DNA sequence file to have
pub const SEQUENCE_EXTENSIONS: [&str; 4] = ["txt", "fa", "fasta", "fna"];

#[derive(Error, Debug)]
#[error("no input file name was given")]
pub struct MissingInputPathError;

#[derive(Error, Debug)]
#[error("{path} already exists (use -q to allow overwriting it)")]
pub struct FileExistsError {
    pub path: String,
}

/// Fail if writing to `path` later would be refused. Nothing is created.
pub fn check_writable(path: &Path, allow_overwrite: bool) -> anyhow::Result<()> {
    if !allow_overwrite && path.exists() {
        return Err(FileExistsError {
            path: path.to_string_lossy().to_string(),
        }
        .into());
    }
    Ok(())
}

pub trait PathBufExt {
    fn open(&self, allow_overwrite: bool) -> anyhow::Result<BufWriter<File>>;
}

impl PathBufExt for PathBuf {
    fn open(&self, allow_overwrite: bool) -> anyhow::Result<BufWriter<File>> {
        let mut file_options = File::options();

        if allow_overwrite {
            file_options.write(true).truncate(true).create(true);
        } else {
            file_options.write(true).create_new(true);
        };

        let file = file_options
            .open(self)
            .context(format!("failed to create file: {}", self.to_string_lossy()))?;

        Ok(BufWriter::new(file))
    }
}

/// Open `path` for writing, or fall back to stdout.
pub fn writer_for(
    path: Option<&PathBuf>,
    allow_overwrite: bool,
) -> anyhow::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(path.open(allow_overwrite)?),
        None => Box::new(std::io::stdout()),
    })
}

/// Ask for the name of the DNA file on `prompt_writer` and read the answer from `reader`.
pub fn prompt_for_path<R: BufRead, W: Write>(
    mut reader: R,
    mut prompt_writer: W,
) -> anyhow::Result<PathBuf> {
    write!(prompt_writer, "Enter the DNA file name: ")?;
    prompt_writer.flush()?;

    let mut answer = String::new();
    reader
        .read_line(&mut answer)
        .context("failed to read the DNA file name")?;

    let answer = answer.trim();
    if answer.is_empty() {
        return Err(MissingInputPathError.into());
    }

    Ok(PathBuf::from(answer))
}

/// Use the path from the command line, or ask for one on the terminal.
pub fn resolve_input_path(input_path: Option<&PathBuf>) -> anyhow::Result<PathBuf> {
    match input_path {
        Some(path) => Ok(path.clone()),
        None => prompt_for_path(std::io::stdin().lock(), std::io::stderr()),
    }
}

pub fn has_sequence_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SEQUENCE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Read the entire input file. A missing or unreadable file ends the run.
pub fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    if !has_sequence_extension(path) {
        log::warn!(
            "{} does not look like a sequence file (expected one of: {})",
            path.to_string_lossy(),
            SEQUENCE_EXTENSIONS.join(", ")
        );
    }

    let bytes = std::fs::read(path).context(format!(
        "failed to read sequence file: {}",
        path.to_string_lossy()
    ))?;

    log::info!(
        "read {} bytes from {}",
        bytes.len(),
        path.to_string_lossy()
    );

    Ok(bytes)
}
