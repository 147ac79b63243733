use crate::structs::Motif;

/// Find the start of every exact match of `motif` in `sequence`.
///
/// Matches may overlap: after a hit at position i the scan
/// resumes at i + 1. Positions are 0-based and ascending.
pub fn find_all_motif_occurrences(sequence: &[u8], motif: &Motif) -> Vec<usize> {
    sequence
        .windows(motif.len())
        .enumerate()
        .filter(|(_, window)| *window == motif.bytes())
        .map(|(idx, _)| idx)
        .collect()
}
