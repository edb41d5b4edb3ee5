use std::ops::Index;

use get_size2::GetSize;
use log::trace;

use crate::{
    cell::Cell,
    error::{Error, Result},
};


/// A rectangular block of cells stored column by column.
///
/// Every column holds exactly [`Columns::rows`] cells.
/// The row count is stored separately, so a block without columns still knows its height.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Columns<C> {
    rows: usize,
    columns: Vec<Vec<C>>,
}

impl<C: Cell> Columns<C> {
    /// Creates a block without columns.
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            columns: Vec::new(),
        }
    }

    /// Creates a block from columns, taking the row count from the first column.
    pub fn from_columns(columns: Vec<Vec<C>>) -> Result<Self> {
        let rows = columns.first().map_or(0, Vec::len);
        Self::check_widths(rows, &columns)?;
        Ok(Self { rows, columns })
    }

    fn check_widths(rows: usize, columns: &[Vec<C>]) -> Result<()> {
        match columns
            .iter()
            .enumerate()
            .find(|(_, column)| column.len() != rows)
        {
            Some((column, cells)) => Err(Error::ColumnShape {
                column,
                expected: rows,
                actual: cells.len(),
            }),
            None => Ok(()),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, column: usize) -> Option<&[C]> {
        self.columns.get(column).map(Vec::as_slice)
    }

    pub fn cell(&self, column: usize, row: usize) -> C {
        self.columns[column][row]
    }

    pub fn cell_mut(&mut self, column: usize, row: usize) -> &mut C {
        &mut self.columns[column][row]
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[C]> + DoubleEndedIterator {
        self.columns.iter().map(Vec::as_slice)
    }

    /// Iterates over the cells of row `row` from the first to the last column.
    pub fn row(&self, row: usize) -> impl ExactSizeIterator<Item = C> + DoubleEndedIterator {
        self.columns.iter().map(move |column| column[row])
    }

    /// Appends columns after checking that all of them have the right width.
    ///
    /// Nothing is appended if any column is malformed.
    pub fn append(&mut self, columns: Vec<Vec<C>>) -> Result<()> {
        Self::check_widths(self.rows, &columns)?;
        trace!("Appending {} columns of {} rows", columns.len(), self.rows);
        self.columns.extend(columns);
        Ok(())
    }

    /// Extends every column with the matching cells of `extension`, adding `added_rows` rows.
    ///
    /// The caller guarantees that there is one extension per column, each holding `added_rows` cells.
    pub(crate) fn extend_rows(&mut self, extension: Vec<Vec<C>>, added_rows: usize) {
        debug_assert_eq!(extension.len(), self.columns.len());
        for (column, cells) in self.columns.iter_mut().zip(extension) {
            debug_assert_eq!(cells.len(), added_rows);
            column.extend(cells);
        }
        self.rows += added_rows;
    }

    /// Reverses the order of all columns.
    pub fn reverse(&mut self) {
        self.columns.reverse();
    }

    /// Reverses the order of the cells of row `row`, leaving all other rows untouched.
    pub fn reverse_row(&mut self, row: usize) {
        let len = self.columns.len();
        for column in 0..len / 2 {
            let mirror = len - 1 - column;
            let cell = self.columns[column][row];
            self.columns[column][row] = self.columns[mirror][row];
            self.columns[mirror][row] = cell;
        }
    }

    /// Applies `map` to every cell.
    pub fn map_cells(&mut self, mut map: impl FnMut(C) -> C) {
        for cell in self.columns.iter_mut().flatten() {
            *cell = map(*cell);
        }
    }

    /// Applies `map` to every cell of row `row`.
    pub fn map_row(&mut self, row: usize, mut map: impl FnMut(C) -> C) {
        for column in &mut self.columns {
            column[row] = map(column[row]);
        }
    }

    /// The number of bytes held on the heap.
    pub fn heap_size(&self) -> usize {
        self.columns.get_heap_size()
    }

    pub fn into_inner(self) -> Vec<Vec<C>> {
        self.columns
    }
}

impl<C> Index<usize> for Columns<C> {
    type Output = [C];

    fn index(&self, column: usize) -> &Self::Output {
        &self.columns[column]
    }
}
