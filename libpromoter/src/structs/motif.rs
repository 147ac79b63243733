use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::alphabet::normalize_nucleotide;

/// The -35 consensus element
pub const UPSTREAM_CONSENSUS: &str = "TTGACA";

/// The -10 consensus element (the Pribnow box)
pub const DOWNSTREAM_CONSENSUS: &str = "TATAAT";

#[derive(Error, Debug)]
#[error("a motif must contain at least one nucleotide")]
pub struct EmptyMotifError;

#[derive(Error, Debug)]
#[error("invalid motif byte: {byte} (motifs may only contain A, C, G, T)")]
pub struct InvalidMotifByteError {
    byte: u8,
}

/// A short, exact nucleotide literal to search for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Motif(Vec<u8>);

impl Motif {
    /// Build a motif from UTF8 bytes. Lower case
    /// nucleotides are accepted and upper cased.
    pub fn new(bytes: &[u8]) -> anyhow::Result<Self> {
        if bytes.is_empty() {
            return Err(EmptyMotifError.into());
        }

        let normalized = bytes
            .iter()
            .map(|&byte| normalize_nucleotide(byte).ok_or(InvalidMotifByteError { byte }))
            .collect::<Result<Vec<u8>, _>>()?;

        Ok(Motif(normalized))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    // a Motif can't be constructed empty
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl std::str::FromStr for Motif {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Motif::new(s.as_bytes())
    }
}

impl Display for Motif {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Motif {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The pair of motifs that make up a promoter.
#[derive(Clone, Debug, Serialize)]
pub struct MotifConfig {
    pub upstream: Motif,
    pub downstream: Motif,
}

impl MotifConfig {
    pub fn new(upstream: Motif, downstream: Motif) -> Self {
        Self {
            upstream,
            downstream,
        }
    }
}

impl Default for MotifConfig {
    fn default() -> Self {
        Self {
            upstream: Motif(UPSTREAM_CONSENSUS.as_bytes().to_vec()),
            downstream: Motif(DOWNSTREAM_CONSENSUS.as_bytes().to_vec()),
        }
    }
}
