use std::{
    fmt::{Display, Formatter, Result},
    sync::Arc,
};

use crate::{
    alphabet::{Alphabet, Letter},
    annotation::Annotation,
    consensus::{DEFAULT_FILTER, DEFAULT_THRESHOLD, QFilter},
    quality::{Encoding, QLetter, Qphred},
    sequence::Sequence,
};


/// A plain single-row sequence.
#[derive(Debug, Clone)]
pub struct LinearSeq {
    annotation: Annotation,
    alphabet: Arc<dyn Alphabet>,
    letters: Vec<Letter>,
}

/// A single-row sequence with quality scores.
///
/// Letters below the quality threshold are rendered through the quality filter.
#[derive(Debug, Clone)]
pub struct QLinearSeq {
    annotation: Annotation,
    alphabet: Arc<dyn Alphabet>,
    letters: Vec<QLetter>,
    encoding: Encoding,
    threshold: Qphred,
    filter: QFilter,
}

/// Translates a global position into an index of a sequence starting at `offset`.
fn local_index(offset: isize, len: usize, position: isize) -> usize {
    let index = position - offset;
    assert!(
        (0..len as isize).contains(&index),
        "position {position} is outside of {offset}..{}",
        offset + len as isize
    );
    index as usize
}

impl LinearSeq {
    pub fn new(id: impl Into<String>, letters: Vec<Letter>, alphabet: Arc<dyn Alphabet>) -> Self {
        Self::with_annotation(Annotation::new(id), letters, alphabet)
    }

    pub fn with_annotation(
        annotation: Annotation,
        letters: Vec<Letter>,
        alphabet: Arc<dyn Alphabet>,
    ) -> Self {
        Self {
            annotation,
            alphabet,
            letters,
        }
    }

    pub fn id(&self) -> &str {
        &self.annotation.id
    }

    pub fn annotation(&self) -> &Annotation {
        &self.annotation
    }

    pub fn annotation_mut(&mut self) -> &mut Annotation {
        &mut self.annotation
    }

    pub fn alphabet(&self) -> &dyn Alphabet {
        self.alphabet.as_ref()
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn set_offset(&mut self, offset: isize) {
        self.annotation.offset = offset;
    }
}

impl QLinearSeq {
    pub fn new(
        id: impl Into<String>,
        letters: Vec<QLetter>,
        alphabet: Arc<dyn Alphabet>,
        encoding: Encoding,
    ) -> Self {
        Self::with_annotation(Annotation::new(id), letters, alphabet, encoding)
    }

    pub fn with_annotation(
        annotation: Annotation,
        letters: Vec<QLetter>,
        alphabet: Arc<dyn Alphabet>,
        encoding: Encoding,
    ) -> Self {
        Self {
            annotation,
            alphabet,
            letters,
            encoding,
            threshold: DEFAULT_THRESHOLD,
            filter: DEFAULT_FILTER,
        }
    }

    pub fn id(&self) -> &str {
        &self.annotation.id
    }

    pub fn annotation(&self) -> &Annotation {
        &self.annotation
    }

    pub fn annotation_mut(&mut self) -> &mut Annotation {
        &mut self.annotation
    }

    pub fn alphabet(&self) -> &dyn Alphabet {
        self.alphabet.as_ref()
    }

    pub fn letters(&self) -> &[QLetter] {
        &self.letters
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn threshold(&self) -> Qphred {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: Qphred) {
        self.threshold = threshold;
    }

    pub fn set_filter(&mut self, filter: QFilter) {
        self.filter = filter;
    }

    pub fn set_offset(&mut self, offset: isize) {
        self.annotation.offset = offset;
    }

    /// The letter at `index` after applying the quality threshold.
    pub fn filtered_letter(&self, index: usize) -> Letter {
        let letter = self.letters[index];
        if letter.quality >= self.threshold {
            letter.letter
        } else {
            (self.filter)(self.alphabet.as_ref(), self.threshold, letter)
        }
    }

    /// The encoded quality line of this sequence.
    pub fn encoded_qualities(&self) -> Vec<u8> {
        self.letters
            .iter()
            .map(|letter| letter.quality.encode(self.encoding))
            .collect()
    }
}

impl Sequence for LinearSeq {
    fn at(&self, position: isize) -> QLetter {
        let index = local_index(self.annotation.offset, self.letters.len(), position);
        QLetter::with_default_quality(self.letters[index])
    }

    fn len(&self) -> usize {
        self.letters.len()
    }

    fn start(&self) -> isize {
        self.annotation.offset
    }

    fn copy_annotation(&self) -> Annotation {
        self.annotation.clone()
    }
}

impl Sequence for QLinearSeq {
    fn at(&self, position: isize) -> QLetter {
        self.letters[local_index(self.annotation.offset, self.letters.len(), position)]
    }

    fn len(&self) -> usize {
        self.letters.len()
    }

    fn start(&self) -> isize {
        self.annotation.offset
    }

    fn copy_annotation(&self) -> Annotation {
        self.annotation.clone()
    }
}

impl Display for LinearSeq {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl Display for QLinearSeq {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for index in 0..self.letters.len() {
            write!(f, "{}", self.filtered_letter(index))?;
        }
        Ok(())
    }
}
