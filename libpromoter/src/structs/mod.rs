pub mod candidate;
pub use candidate::Candidate;

pub mod motif;
pub use motif::{Motif, MotifConfig};

pub mod sequence;
pub use sequence::Sequence;
