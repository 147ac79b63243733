use phf::phf_map;

pub const UTF8_SPACE: u8 = 32;
pub const UTF8_STAR: u8 = 42;
pub const UTF8_UNDERSCORE: u8 = 95;
pub const UTF8_GREATER_THAN: u8 = 62;

/// The byte used to mark a position covered by a motif occurrence
pub const MARKER: u8 = UTF8_STAR;

/// The byte used for every position not covered by a motif occurrence
pub const FILLER: u8 = UTF8_UNDERSCORE;

pub const DNA_ALPHABET: [&str; 4] = ["A", "C", "G", "T"];

/// maps from \<UTF8 nucleotide, either case\> -> \<upper case UTF8 nucleotide\>
pub const UTF8_TO_UPPER_DNA: phf::Map<u8, u8> = phf_map! {
    // upper case
    65u8 => 65,   // A
    67u8 => 67,   // C
    71u8 => 71,   // G
    84u8 => 84,   // T
    // lower case
    97u8 => 65,   // a
    99u8 => 67,   // c
    103u8 => 71,  // g
    116u8 => 84,  // t
};

/// Returns the upper case nucleotide for `byte`, or None if
/// `byte` is not one of A, C, G, T in either case.
#[inline]
pub fn normalize_nucleotide(byte: u8) -> Option<u8> {
    UTF8_TO_UPPER_DNA.get(&byte).copied()
}

#[inline]
pub fn is_nucleotide(byte: u8) -> bool {
    matches!(byte, b'A' | b'C' | b'G' | b'T')
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn test_normalize_nucleotide() {
        DNA_ALPHABET.iter().for_each(|n| {
            let upper = n.as_bytes()[0];
            let lower = n.to_lowercase().as_bytes()[0];
            check!(normalize_nucleotide(upper) == Some(upper));
            check!(normalize_nucleotide(lower) == Some(upper));
        });

        b"NnUuXx-.* \n>".iter().for_each(|&b| {
            check!(normalize_nucleotide(b).is_none());
        });
    }

    #[test]
    fn test_marker_and_filler_are_distinct() {
        check!(MARKER != FILLER);
        check!(!is_nucleotide(MARKER));
        check!(!is_nucleotide(FILLER));
    }
}
