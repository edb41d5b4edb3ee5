use std::{borrow::Cow, fmt::Debug};

use get_size2::GetSize;
use lib_seq::{Aligned, Alphabet, ComplementTable, Letter, QLetter, QLinearSeq};

use crate::config::QualityConfig;

/// The content of one alignment cell.
///
/// Alignments are generic over their cell type, which decides how columns are projected to plain and quality letters.
pub trait Cell: Copy + Debug + PartialEq + Send + Sync + GetSize + 'static {
    /// Settings that influence the projection of cells to letters.
    type Config: Clone + Debug + Default;

    /// The cell used for padding.
    fn gap(gap: Letter) -> Self;

    fn letter(&self) -> Letter;

    fn qletter(&self) -> QLetter;

    fn from_qletter(letter: QLetter) -> Self;

    /// Complements the letter of this cell, keeping any quality with it.
    fn complement(self, table: &ComplementTable) -> Self;

    /// Projects a column to the letters reported to callers.
    fn letters<'column>(
        column: &'column [Self],
        config: &Self::Config,
        alphabet: &dyn Alphabet,
    ) -> Cow<'column, [Letter]>;

    fn qletters(column: &[Self]) -> Cow<'_, [QLetter]>;

    /// Reads the column at global position `position` of another alignment.
    fn aligned_column(aligned: &dyn Aligned, position: isize) -> Option<Vec<Self>>;

    /// Transfers the settings of this cell type to a consensus sequence.
    fn configure_consensus(config: &Self::Config, consensus: &mut QLinearSeq);
}

impl Cell for Letter {
    type Config = ();

    fn gap(gap: Letter) -> Self {
        gap
    }

    fn letter(&self) -> Letter {
        *self
    }

    fn qletter(&self) -> QLetter {
        QLetter::with_default_quality(*self)
    }

    fn from_qletter(letter: QLetter) -> Self {
        letter.letter
    }

    fn complement(self, table: &ComplementTable) -> Self {
        table.complement(self)
    }

    fn letters<'column>(
        column: &'column [Self],
        _config: &(),
        _alphabet: &dyn Alphabet,
    ) -> Cow<'column, [Letter]> {
        Cow::Borrowed(column)
    }

    fn qletters(column: &[Self]) -> Cow<'_, [QLetter]> {
        column.iter().map(Cell::qletter).collect()
    }

    fn aligned_column(aligned: &dyn Aligned, position: isize) -> Option<Vec<Self>> {
        aligned.column(position, true).map(Cow::into_owned)
    }

    fn configure_consensus(_config: &(), _consensus: &mut QLinearSeq) {}
}

impl Cell for QLetter {
    type Config = QualityConfig;

    fn gap(gap: Letter) -> Self {
        QLetter::new(gap, Default::default())
    }

    fn letter(&self) -> Letter {
        self.letter
    }

    fn qletter(&self) -> QLetter {
        *self
    }

    fn from_qletter(letter: QLetter) -> Self {
        letter
    }

    fn complement(self, table: &ComplementTable) -> Self {
        QLetter::new(table.complement(self.letter), self.quality)
    }

    fn letters<'column>(
        column: &'column [Self],
        config: &QualityConfig,
        alphabet: &dyn Alphabet,
    ) -> Cow<'column, [Letter]> {
        column
            .iter()
            .map(|letter| {
                if letter.quality >= config.threshold {
                    letter.letter
                } else {
                    (config.filter)(alphabet, config.threshold, *letter)
                }
            })
            .collect()
    }

    fn qletters(column: &[Self]) -> Cow<'_, [QLetter]> {
        Cow::Borrowed(column)
    }

    fn aligned_column(aligned: &dyn Aligned, position: isize) -> Option<Vec<Self>> {
        aligned.column_ql(position, true).map(Cow::into_owned)
    }

    fn configure_consensus(config: &QualityConfig, consensus: &mut QLinearSeq) {
        consensus.set_threshold(config.threshold);
        consensus.set_filter(config.filter);
    }
}
