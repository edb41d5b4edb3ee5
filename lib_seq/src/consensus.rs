//! Per-column reductions and quality filter policies.
//!
//! Alignments hold these as plain function values, so any function with a matching signature can be injected.

use crate::{
    alphabet::{Alphabet, Letter},
    quality::{QLetter, Qphred},
    sequence::Aligned,
};


/// Reduces the column at a global position of an alignment to a single quality letter.
pub type ConsenseFn = fn(&dyn Aligned, &dyn Alphabet, isize, bool) -> QLetter;

/// Chooses the letter reported in place of a letter whose quality lies below the threshold.
pub type QFilter = fn(&dyn Alphabet, Qphred, QLetter) -> Letter;

/// Letters below this quality are reported through the quality filter unless configured otherwise.
pub const DEFAULT_THRESHOLD: Qphred = Qphred(2);

pub const DEFAULT_FILTER: QFilter = ambig_filter;

/// Counts the canonical letters of a column.
///
/// Returns the index of the most frequent letter (the first one on ties), its count and the column height.
/// Gaps and other non-canonical letters count towards the height only.
fn plurality(
    aligned: &dyn Aligned,
    alphabet: &dyn Alphabet,
    position: isize,
    fill: bool,
) -> Option<(usize, usize, usize)> {
    let column = aligned.column_ql(position, fill)?;
    let mut counts = vec![0usize; alphabet.len()];
    for letter in column.iter() {
        if let Some(index) = alphabet.index_of(letter.letter) {
            counts[index] += 1;
        }
    }

    let (index, count) = counts
        .iter()
        .copied()
        .enumerate()
        .fold((0, 0), |best, (index, count)| {
            if count > best.1 { (index, count) } else { best }
        });
    Some((index, count, column.len()))
}

fn support_quality(count: usize, height: usize) -> Qphred {
    Qphred::from_error_probability(1.0 - count as f64 / height as f64)
}

/// Reports the most frequent canonical letter of the column.
///
/// The quality reflects the fraction of the column that does not support the letter.
/// Columns without any canonical letter yield a gap with quality zero.
pub fn default_consensus(
    aligned: &dyn Aligned,
    alphabet: &dyn Alphabet,
    position: isize,
    fill: bool,
) -> QLetter {
    match plurality(aligned, alphabet, position, fill) {
        Some((index, count, height)) if count > 0 => {
            QLetter::new(alphabet.letter(index), support_quality(count, height))
        }
        _ => QLetter::new(alphabet.gap(), Qphred(0)),
    }
}

/// Reports the letter supported by a strict majority of the column, or the ambiguity letter otherwise.
///
/// Like [`default_consensus`], columns without any canonical letter yield a gap.
pub fn majority_consensus(
    aligned: &dyn Aligned,
    alphabet: &dyn Alphabet,
    position: isize,
    fill: bool,
) -> QLetter {
    match plurality(aligned, alphabet, position, fill) {
        Some((index, count, height)) if count * 2 > height => {
            QLetter::new(alphabet.letter(index), support_quality(count, height))
        }
        Some((_, count, height)) if count > 0 => {
            QLetter::new(alphabet.ambiguous(), support_quality(count, height))
        }
        _ => QLetter::new(alphabet.gap(), Qphred(0)),
    }
}

/// Replaces low quality letters with the ambiguity letter of the alphabet.
pub fn ambig_filter(alphabet: &dyn Alphabet, _threshold: Qphred, _letter: QLetter) -> Letter {
    alphabet.ambiguous()
}

/// Reports low quality letters in lower case.
pub fn case_filter(_alphabet: &dyn Alphabet, _threshold: Qphred, letter: QLetter) -> Letter {
    letter.letter.to_ascii_lowercase()
}

/// Reports low quality letters unchanged.
pub fn no_filter(_alphabet: &dyn Alphabet, _threshold: Qphred, letter: QLetter) -> Letter {
    letter.letter
}
