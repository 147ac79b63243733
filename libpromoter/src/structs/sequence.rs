use seq_io::fasta::{Reader, Record};
use std::fmt::{Debug, Display, Formatter};
use std::io::Read;
use std::path::Path;

use crate::alphabet::{normalize_nucleotide, UTF8_GREATER_THAN, UTF8_SPACE};
use anyhow::{Context, Result};

/// Remove every whitespace and line break byte from raw input text.
pub fn sanitize(raw: &[u8]) -> Vec<u8> {
    raw.iter()
        .filter(|b| !b.is_ascii_whitespace())
        .copied()
        .collect()
}

/// Upper case every byte and keep only A, C, G, and T.
///
/// Anything else is dropped without complaint, so
/// validating an already clean sequence is a no-op.
pub fn validate(sanitized: &[u8]) -> Vec<u8> {
    sanitized
        .iter()
        .filter_map(|&b| normalize_nucleotide(b))
        .collect()
}

/// Returns true if the first non-whitespace byte of `bytes` is a '>'
pub fn looks_like_fasta(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|&b| b == UTF8_GREATER_THAN)
}

/// A cleaned DNA sequence: only upper case A, C, G, and T.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    /// The name of the sequence; empty when the
    /// input was raw text rather than a fasta
    pub name: String,
    /// The sequence details. If the sequence comes from a fasta, this
    /// is the information following the sequence name in the header
    pub details: Option<String>,
    /// The length of the sequence
    pub length: usize,
    /// The nucleotides, as UTF8 bytes. Indexing is 0-based.
    pub utf8_bytes: Vec<u8>,
    /// The number of non-whitespace input bytes the validator threw away
    pub dropped_byte_count: usize,
}

impl Sequence {
    /// Run raw text through the sanitizer and the validator.
    pub fn from_raw_text(raw: &[u8]) -> Self {
        let sanitized = sanitize(raw);
        let utf8_bytes = validate(&sanitized);

        Sequence {
            name: "".to_string(),
            details: None,
            length: utf8_bytes.len(),
            dropped_byte_count: sanitized.len() - utf8_bytes.len(),
            utf8_bytes,
        }
    }

    /// Build sequences from the contents of an input file.
    ///
    /// Fasta input produces one sequence per record. Anything
    /// else is treated as a single unnamed sequence.
    pub fn from_input_bytes(bytes: &[u8]) -> Result<Vec<Self>> {
        if looks_like_fasta(bytes) {
            let start = bytes
                .iter()
                .position(|b| !b.is_ascii_whitespace())
                .unwrap_or(0);
            Self::from_fasta_reader(&bytes[start..])
        } else {
            Ok(vec![Self::from_raw_text(bytes)])
        }
    }

    pub fn from_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<Self>> {
        let file = std::fs::File::open(&path).with_context(|| {
            format!(
                "failed to open fasta file: {}",
                path.as_ref().to_string_lossy()
            )
        })?;
        Self::from_fasta_reader(file)
    }

    pub fn from_fasta_reader<R: Read>(data: R) -> Result<Vec<Self>> {
        let mut seqs: Vec<Self> = vec![];
        let mut reader = Reader::new(data);

        while let Some(record) = reader.next() {
            let record = record.with_context(|| "failed to read fasta record")?;
            let header = record.head();

            // invalid UTF8 in a header is replaced, not rejected
            let (name, details) = match header.iter().position(|&b| b == UTF8_SPACE) {
                Some(idx) => (
                    String::from_utf8_lossy(&header[..idx]).into_owned(),
                    Some(String::from_utf8_lossy(&header[idx + 1..]).into_owned()),
                ),
                None => (String::from_utf8_lossy(header).into_owned(), None),
            };

            let raw: Vec<u8> = record.seq_lines().flatten().copied().collect();

            seqs.push(Sequence {
                name,
                details,
                ..Self::from_raw_text(&raw)
            });
        }
        Ok(seqs)
    }

    /// The sequence as a string slice.
    pub fn as_str(&self) -> &str {
        // the validator only lets ASCII through
        std::str::from_utf8(&self.utf8_bytes).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if !self.name.is_empty() {
            write!(f, ">{}", self.name)?;

            if let Some(ref details) = self.details {
                write!(f, " {details}")?
            };

            writeln!(f)?;
        }

        let mut iter = self.utf8_bytes.chunks(80).peekable();

        while let Some(byte_chunk) = iter.next() {
            match std::str::from_utf8(byte_chunk) {
                Ok(seq_line) => {
                    write!(f, "{}", seq_line)?;
                    if iter.peek().is_some() {
                        // if we're not on the last
                        // line, add a linebreak
                        writeln!(f)?;
                    }
                }
                Err(_) => return Err(std::fmt::Error),
            }
        }
        Ok(())
    }
}

impl Debug for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
