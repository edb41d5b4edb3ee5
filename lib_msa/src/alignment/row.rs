use std::{
    fmt::{Display, Formatter},
    sync::Arc,
};

use lib_seq::{
    Alphabet, Annotation, Encoding, Letter, LinearSeq, QLetter, QLinearSeq, Qphred, Sequence,
    Strand, Topology,
};
use log::trace;

use crate::{
    cell::Cell,
    columns::Columns,
    error::{Error, Result},
};

use super::{Alignment, complement_table};

#[cfg(test)]
mod tests;

/// A read-only view of a single row of an alignment.
///
/// Positions are relative to the offset of the row annotation.
#[derive(Debug, Clone, Copy)]
pub struct Row<'alignment, C: Cell> {
    alignment: &'alignment Alignment<C>,
    row: usize,
}

/// A view of a single row that writes through to the alignment.
#[derive(Debug)]
pub struct RowMut<'alignment, C: Cell> {
    alignment: &'alignment mut Alignment<C>,
    row: usize,
}

pub type QRow<'alignment> = Row<'alignment, QLetter>;
pub type QRowMut<'alignment> = RowMut<'alignment, QLetter>;

fn row_index(annotation: &Annotation, len: usize, position: isize) -> Option<usize> {
    usize::try_from(position - annotation.offset)
        .ok()
        .filter(|&index| index < len)
}

impl<'alignment, C: Cell> Row<'alignment, C> {
    pub(super) fn new(alignment: &'alignment Alignment<C>, row: usize) -> Self {
        Self { alignment, row }
    }

    /// The index of this row within the alignment.
    pub fn index(&self) -> usize {
        self.row
    }

    pub fn annotation(&self) -> &'alignment Annotation {
        &self.alignment.sub_annotations[self.row]
    }

    pub fn name(&self) -> &'alignment str {
        &self.annotation().id
    }

    pub fn description(&self) -> &'alignment str {
        &self.annotation().description
    }

    pub fn strand(&self) -> Strand {
        self.annotation().strand
    }

    pub fn topology(&self) -> Topology {
        self.annotation().topology
    }

    pub fn alphabet(&self) -> &'alignment dyn Alphabet {
        self.alignment.alphabet.as_ref()
    }

    pub fn len(&self) -> usize {
        self.alignment.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alignment.is_empty()
    }

    /// The position of the first cell in the coordinates of this row.
    pub fn start(&self) -> isize {
        self.annotation().offset
    }

    pub fn end(&self) -> isize {
        self.start() + self.len() as isize
    }

    /// The cell at `position`, or `None` if the position lies outside of the row.
    pub fn get(&self, position: isize) -> Option<C> {
        let index = row_index(self.annotation(), self.len(), position)?;
        Some(self.alignment.columns.cell(index, self.row))
    }

    /// The cell at `position`.
    ///
    /// Panics if the position lies outside of `start()..end()`.
    pub fn at(&self, position: isize) -> C {
        self.get(position).unwrap_or_else(|| {
            panic!(
                "position {position} is outside of row {} spanning {}..{}",
                self.row,
                self.start(),
                self.end()
            )
        })
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = C> + DoubleEndedIterator {
        self.alignment.columns.row(self.row)
    }

    pub fn copy_annotation(&self) -> Annotation {
        self.annotation().clone()
    }

    /// Rows do not own a column store.
    pub fn slice(&self) -> Result<&'alignment Columns<C>> {
        Err(Error::UnsupportedOperation("slice of a row view"))
    }
}

impl Row<'_, Letter> {
    /// Copies the letters of this row into an independent sequence.
    pub fn copy(&self) -> LinearSeq {
        LinearSeq::with_annotation(
            self.copy_annotation(),
            self.iter().collect(),
            Arc::clone(&self.alignment.alphabet),
        )
    }
}

impl Row<'_, QLetter> {
    /// Copies the letters of this row into an independent sequence that keeps the quality settings of the alignment.
    pub fn copy(&self) -> QLinearSeq {
        let config = self.alignment.quality_config();
        let mut copy = QLinearSeq::with_annotation(
            self.copy_annotation(),
            self.iter().collect(),
            Arc::clone(&self.alignment.alphabet),
            config.encoding,
        );
        copy.set_threshold(config.threshold);
        copy.set_filter(config.filter);
        copy
    }

    pub fn encoding(&self) -> Encoding {
        self.alignment.encoding()
    }

    /// The error probability of the letter at `position`.
    pub fn e_at(&self, position: isize) -> f64 {
        self.at(position).quality.error_probability()
    }

    /// The quality of the letter at `position`, encoded with the encoding of the alignment.
    pub fn q_encode(&self, position: isize) -> u8 {
        self.at(position).quality.encode(self.encoding())
    }
}

impl<C: Cell> Sequence for Row<'_, C> {
    fn at(&self, position: isize) -> QLetter {
        Row::at(self, position).qletter()
    }

    fn len(&self) -> usize {
        Row::len(self)
    }

    fn start(&self) -> isize {
        Row::start(self)
    }

    fn copy_annotation(&self) -> Annotation {
        Row::copy_annotation(self)
    }
}

impl<C: Cell> Display for Row<'_, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for cell in self.iter() {
            write!(f, "{}", cell.letter())?;
        }
        Ok(())
    }
}

impl<'alignment, C: Cell> RowMut<'alignment, C> {
    pub(super) fn new(alignment: &'alignment mut Alignment<C>, row: usize) -> Self {
        Self { alignment, row }
    }

    /// A read-only view of the same row.
    pub fn as_row(&self) -> Row<'_, C> {
        Row::new(&*self.alignment, self.row)
    }

    pub fn index(&self) -> usize {
        self.row
    }

    pub fn len(&self) -> usize {
        self.alignment.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alignment.is_empty()
    }

    pub fn start(&self) -> isize {
        self.annotation().offset
    }

    pub fn get(&self, position: isize) -> Option<C> {
        self.as_row().get(position)
    }

    pub fn at(&self, position: isize) -> C {
        self.as_row().at(position)
    }

    pub fn annotation(&self) -> &Annotation {
        &self.alignment.sub_annotations[self.row]
    }

    /// Overwrites the cell at `position`.
    ///
    /// Panics if the position lies outside of the row.
    pub fn set(&mut self, position: isize, cell: C) {
        let len = self.len();
        let Some(index) = row_index(self.annotation(), len, position) else {
            panic!(
                "position {position} is outside of row {} spanning {}..{}",
                self.row,
                self.start(),
                self.start() + len as isize
            );
        };
        *self.alignment.columns.cell_mut(index, self.row) = cell;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.alignment.sub_annotations[self.row].description = description.into();
    }

    /// Moves the coordinate frame of this row.
    pub fn set_offset(&mut self, offset: isize) {
        self.alignment.sub_annotations[self.row].offset = offset;
    }

    pub fn set_strand(&mut self, strand: Strand) {
        self.alignment.sub_annotations[self.row].strand = strand;
    }

    pub fn set_topology(&mut self, topology: Topology) {
        self.alignment.sub_annotations[self.row].topology = topology;
    }

    /// Reverse complements this row in place and negates its strand.
    ///
    /// All other rows stay unchanged.
    pub fn rev_comp(&mut self) -> Result<()> {
        let alphabet = Arc::clone(&self.alignment.alphabet);
        let table = complement_table(alphabet.as_ref())?;
        trace!(
            "Reverse complementing row {} of alignment '{}'",
            self.row,
            self.alignment.id()
        );

        let columns = &mut self.alignment.columns;
        columns.reverse_row(self.row);
        columns.map_row(self.row, |cell| cell.complement(table));
        let annotation = &mut self.alignment.sub_annotations[self.row];
        annotation.strand = -annotation.strand;
        Ok(())
    }

    /// Reverses this row in place without complementing it.
    pub fn reverse(&mut self) {
        trace!(
            "Reversing row {} of alignment '{}'",
            self.row,
            self.alignment.id()
        );
        self.alignment.columns.reverse_row(self.row);
        self.alignment.sub_annotations[self.row].strand = Strand::None;
    }

    /// Rows do not own a column store.
    pub fn slice(&self) -> Result<&Columns<C>> {
        Err(Error::UnsupportedOperation("slice of a row view"))
    }

    /// Rows do not own a column store.
    pub fn set_slice(&mut self, _columns: Columns<C>) -> Result<()> {
        Err(Error::UnsupportedOperation("set_slice of a row view"))
    }
}

impl RowMut<'_, Letter> {
    pub fn copy(&self) -> LinearSeq {
        self.as_row().copy()
    }
}

impl RowMut<'_, QLetter> {
    pub fn copy(&self) -> QLinearSeq {
        self.as_row().copy()
    }

    pub fn e_at(&self, position: isize) -> f64 {
        self.as_row().e_at(position)
    }

    /// Overwrites the quality at `position` with the one matching error probability `probability`.
    pub fn set_e(&mut self, position: isize, probability: f64) {
        let letter = self.at(position);
        self.set(
            position,
            QLetter::new(letter.letter, Qphred::from_error_probability(probability)),
        );
    }
}
