#![forbid(clippy::mod_module_files)]

//! The sequence vocabulary shared by alignment containers: alphabets, quality letters,
//! per-sequence annotations, single-row sequences and the capability traits
//! through which sequences and alignments are combined.

pub mod alphabet;
pub mod annotation;
pub mod consensus;
pub mod linear;
pub mod quality;
pub mod sequence;

pub use alphabet::{Alphabet, ComplementTable, Letter, LetterAlphabet};
pub use annotation::{Annotation, Strand, Topology};
pub use consensus::{ConsenseFn, QFilter};
pub use linear::{LinearSeq, QLinearSeq};
pub use quality::{Encoding, QLetter, Qphred};
pub use sequence::{Aligned, Sequence};
