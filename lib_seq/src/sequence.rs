use std::borrow::Cow;

use crate::{
    alphabet::{Alphabet, Letter},
    annotation::Annotation,
    quality::QLetter,
};

/// A single-row sequence placed in global coordinates.
pub trait Sequence {
    /// The quality letter at global position `position`.
    ///
    /// Panics if `position` lies outside of `start()..end()`.
    fn at(&self, position: isize) -> QLetter;

    /// The number of symbols.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The global position of the first symbol.
    fn start(&self) -> isize;

    /// The global position after the last symbol.
    fn end(&self) -> isize {
        self.start() + self.len() as isize
    }

    fn copy_annotation(&self) -> Annotation;

    /// Returns the multi-row view of this sequence, if it is an alignment.
    fn as_aligned(&self) -> Option<&dyn Aligned> {
        None
    }
}

/// A multi-row sequence whose symbols are addressed column-wise.
pub trait Aligned {
    fn start(&self) -> isize;

    fn end(&self) -> isize;

    fn rows(&self) -> usize;

    fn alphabet(&self) -> &dyn Alphabet;

    /// The letters of the column at global position `position`, or `None` if the position is not covered.
    fn column(&self, position: isize, fill: bool) -> Option<Cow<'_, [Letter]>>;

    /// The quality letters of the column at global position `position`, or `None` if the position is not covered.
    fn column_ql(&self, position: isize, fill: bool) -> Option<Cow<'_, [QLetter]>>;

    /// The annotation of row `row`.
    fn row_annotation(&self, row: usize) -> Annotation;
}
