use std::{
    borrow::Cow,
    fmt::{Display, Formatter},
    iter,
    sync::Arc,
};

use lib_seq::{
    Aligned, Alphabet, Annotation, ComplementTable, ConsenseFn, Encoding, Letter, QFilter,
    QLetter, QLinearSeq, Qphred, Sequence, Strand, Topology,
};
use log::{debug, trace};

use crate::{
    cell::Cell,
    columns::Columns,
    config::QualityConfig,
    error::{Error, Result},
};

pub mod row;


pub use row::{QRow, QRowMut, Row, RowMut};

/// A multiple sequence alignment stored as a sequence of columns.
///
/// Each row carries its own annotation, whose offset defines the coordinate frame of the row views.
/// The alignment itself spans `start()..end()` in global coordinates.
#[derive(Debug, Clone)]
pub struct Alignment<C: Cell> {
    annotation: Annotation,
    alphabet: Arc<dyn Alphabet>,
    sub_annotations: Vec<Annotation>,
    columns: Columns<C>,
    consensus: ConsenseFn,
    config: C::Config,
}

/// An alignment of plain letters.
pub type AlignedSequence = Alignment<Letter>;

/// An alignment of letters with quality scores.
pub type QualityAlignedSequence = Alignment<QLetter>;

pub(crate) fn complement_table(alphabet: &dyn Alphabet) -> Result<&ComplementTable> {
    alphabet
        .complement_table()
        .ok_or_else(|| Error::UnsupportedCapability {
            alphabet: alphabet.name().to_string(),
            capability: "complement table",
        })
}

fn synthesize_sub_annotations(id: &str, rows: usize) -> Vec<Annotation> {
    (0..rows)
        .map(|row| Annotation::new(format!("{id}:{row}")))
        .collect()
}

impl<C: Cell> Alignment<C> {
    /// Creates an alignment from a block of columns.
    ///
    /// Rows are named after `row_identifiers`.
    /// If no identifiers are given, rows are named `<id>:<row>`.
    /// Otherwise, the number of identifiers must match the height of the columns.
    pub fn with_config(
        id: impl Into<String>,
        row_identifiers: &[&str],
        columns: Vec<Vec<C>>,
        alphabet: Arc<dyn Alphabet>,
        consensus: ConsenseFn,
        config: C::Config,
    ) -> Result<Self> {
        let id = id.into();
        let sub_annotations = match (row_identifiers.len(), columns.first()) {
            (0, None) => Vec::new(),
            (0, Some(first)) => synthesize_sub_annotations(&id, first.len()),
            (identifiers, Some(first)) if identifiers == first.len() => row_identifiers
                .iter()
                .map(|&row_identifier| Annotation::new(row_identifier))
                .collect(),
            (identifiers, first) => {
                return Err(Error::Construction {
                    identifiers,
                    rows: first.map_or(0, Vec::len),
                });
            }
        };
        let columns = Columns::from_columns(columns)?;

        debug!(
            "Created alignment '{id}' with {} rows and {} columns ({} bytes)",
            columns.rows(),
            columns.len(),
            columns.heap_size(),
        );

        Ok(Self {
            annotation: Annotation::new(id),
            alphabet,
            sub_annotations,
            columns,
            consensus,
            config,
        })
    }

    /// Creates an alignment without rows and columns.
    pub fn new_empty(
        id: impl Into<String>,
        alphabet: Arc<dyn Alphabet>,
        consensus: ConsenseFn,
    ) -> Self {
        Self {
            annotation: Annotation::new(id),
            alphabet,
            sub_annotations: Vec::new(),
            columns: Columns::new(0),
            consensus,
            config: Default::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.annotation.id
    }

    pub fn description(&self) -> &str {
        &self.annotation.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.annotation.description = description.into();
    }

    pub fn annotation(&self) -> &Annotation {
        &self.annotation
    }

    pub fn offset(&self) -> isize {
        self.annotation.offset
    }

    pub fn set_offset(&mut self, offset: isize) {
        self.annotation.offset = offset;
    }

    pub fn strand(&self) -> Strand {
        self.annotation.strand
    }

    pub fn set_strand(&mut self, strand: Strand) {
        self.annotation.strand = strand;
    }

    pub fn topology(&self) -> Topology {
        self.annotation.topology
    }

    pub fn set_topology(&mut self, topology: Topology) {
        self.annotation.topology = topology;
    }

    pub fn alphabet(&self) -> &dyn Alphabet {
        self.alphabet.as_ref()
    }

    pub fn sub_annotations(&self) -> &[Annotation] {
        &self.sub_annotations
    }

    pub fn sub_annotation(&self, row: usize) -> Option<&Annotation> {
        self.sub_annotations.get(row)
    }

    pub fn consensus_fn(&self) -> ConsenseFn {
        self.consensus
    }

    pub fn set_consensus_fn(&mut self, consensus: ConsenseFn) {
        self.consensus = consensus;
    }

    /// The number of rows.
    pub fn rows(&self) -> usize {
        self.columns.rows()
    }

    /// The number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The global position of the first column.
    pub fn start(&self) -> isize {
        self.annotation.offset
    }

    /// The global position after the last column.
    pub fn end(&self) -> isize {
        self.start() + self.len() as isize
    }

    /// The number of bytes held by the column store on the heap.
    pub fn heap_size(&self) -> usize {
        self.columns.heap_size()
    }

    fn column_index(&self, position: isize) -> Option<usize> {
        usize::try_from(position - self.start())
            .ok()
            .filter(|&index| index < self.len())
    }

    /// The letters of the column at global position `position`.
    ///
    /// Quality alignments report letters below the quality threshold through their quality filter.
    pub fn column(&self, position: isize, _fill: bool) -> Option<Cow<'_, [Letter]>> {
        let index = self.column_index(position)?;
        Some(C::letters(
            &self.columns[index],
            &self.config,
            self.alphabet.as_ref(),
        ))
    }

    /// The quality letters of the column at global position `position`.
    ///
    /// Plain alignments report [`Qphred::DEFAULT`] for every letter.
    pub fn column_ql(&self, position: isize, _fill: bool) -> Option<Cow<'_, [QLetter]>> {
        let index = self.column_index(position)?;
        Some(C::qletters(&self.columns[index]))
    }

    /// Appends columns to the end of the alignment.
    ///
    /// Each column must hold exactly one cell per row, otherwise nothing is appended.
    pub fn append_columns(&mut self, columns: Vec<Vec<C>>) -> Result<()> {
        debug!(
            "Appending {} columns to alignment '{}'",
            columns.len(),
            self.id()
        );
        self.columns.append(columns)
    }

    /// Appends one sequence to each row.
    ///
    /// Rows whose sequence is shorter than the longest one are padded with gaps.
    pub fn append_each<Row: AsRef<[C]>>(&mut self, rows: &[Row]) -> Result<()> {
        if rows.len() != self.rows() {
            return Err(Error::RowCount {
                expected: self.rows(),
                actual: rows.len(),
            });
        }

        let width = rows
            .iter()
            .map(|row| row.as_ref().len())
            .max()
            .unwrap_or(0);
        let gap = C::gap(self.alphabet.gap());
        debug!(
            "Appending {width} columns row by row to alignment '{}'",
            self.id()
        );

        let columns = (0..width)
            .map(|column| {
                rows.iter()
                    .map(|row| row.as_ref().get(column).copied().unwrap_or(gap))
                    .collect()
            })
            .collect();
        self.columns.append(columns)
    }

    /// Adds sequences as new rows within the current column range.
    ///
    /// Sequences that are alignments themselves contribute one row per row.
    /// Positions of the alignment not covered by a sequence are filled with gaps,
    /// and parts of a sequence outside of the alignment are dropped.
    pub fn add(&mut self, sequences: &[&dyn Sequence]) -> Result<()> {
        let added_rows: usize = sequences
            .iter()
            .map(|sequence| sequence.as_aligned().map_or(1, |aligned| aligned.rows()))
            .sum();
        debug!(
            "Adding {} sequences with {added_rows} rows to alignment '{}'",
            sequences.len(),
            self.id()
        );

        let gap = C::gap(self.alphabet.gap());
        let extension = (self.start()..self.end())
            .map(|position| merge_column(sequences, position, gap))
            .collect::<Result<Vec<_>>>()?;
        self.columns.extend_rows(extension, added_rows);

        for sequence in sequences {
            match sequence.as_aligned() {
                Some(aligned) => self
                    .sub_annotations
                    .extend((0..aligned.rows()).map(|row| aligned.row_annotation(row))),
                None => self.sub_annotations.push(sequence.copy_annotation()),
            }
        }

        Ok(())
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row < self.rows() {
            Ok(())
        } else {
            Err(Error::RowOutOfRange {
                row,
                rows: self.rows(),
            })
        }
    }

    /// A read-only view of row `row`.
    pub fn row(&self, row: usize) -> Result<Row<'_, C>> {
        self.check_row(row)?;
        Ok(Row::new(self, row))
    }

    /// A view of row `row` that writes through to this alignment.
    pub fn row_mut(&mut self, row: usize) -> Result<RowMut<'_, C>> {
        self.check_row(row)?;
        Ok(RowMut::new(self, row))
    }

    /// Reverse complements all rows and negates the strand of the alignment.
    ///
    /// The strands of the rows stay unchanged.
    pub fn rev_comp(&mut self) -> Result<()> {
        let alphabet = Arc::clone(&self.alphabet);
        let table = complement_table(alphabet.as_ref())?;
        trace!("Reverse complementing alignment '{}'", self.id());

        self.columns.reverse();
        self.columns.map_cells(|cell| cell.complement(table));
        self.annotation.strand = -self.annotation.strand;
        Ok(())
    }

    /// Reverses all rows without complementing them.
    pub fn reverse(&mut self) {
        trace!("Reversing alignment '{}'", self.id());
        self.columns.reverse();
        self.annotation.strand = Strand::None;
    }

    /// Computes the consensus of each column with the consensus function of this alignment.
    pub fn consensus(&self, fill: bool) -> QLinearSeq {
        let letters = (self.start()..self.end())
            .map(|position| (self.consensus)(self, self.alphabet.as_ref(), position, fill))
            .collect();
        let annotation = Annotation {
            id: format!("Consensus:{}", self.id()),
            description: String::new(),
            offset: self.annotation.offset,
            strand: self.annotation.strand,
            topology: self.annotation.topology,
        };

        let mut consensus = QLinearSeq::with_annotation(
            annotation,
            letters,
            Arc::clone(&self.alphabet),
            Encoding::Sanger,
        );
        C::configure_consensus(&self.config, &mut consensus);
        consensus
    }

    /// The column store of this alignment.
    pub fn slice(&self) -> &Columns<C> {
        &self.columns
    }

    /// Replaces the column store of this alignment.
    ///
    /// The row count of the replacement must match the existing row annotations.
    /// An alignment without row annotations names the rows of the replacement `<id>:<row>`.
    pub fn set_slice(&mut self, columns: Columns<C>) -> Result<()> {
        if self.sub_annotations.is_empty() {
            self.sub_annotations = synthesize_sub_annotations(self.id(), columns.rows());
        } else if self.sub_annotations.len() != columns.rows() {
            return Err(Error::RowCount {
                expected: self.sub_annotations.len(),
                actual: columns.rows(),
            });
        }

        debug!(
            "Replacing the {} columns of alignment '{}' with {} columns",
            self.len(),
            self.id(),
            columns.len()
        );
        self.columns = columns;
        Ok(())
    }
}

/// Collects the cells contributed by `sequences` at global position `position`.
fn merge_column<C: Cell>(
    sequences: &[&dyn Sequence],
    position: isize,
    gap: C,
) -> Result<Vec<C>> {
    let mut column = Vec::with_capacity(sequences.len());

    for (index, sequence) in sequences.iter().enumerate() {
        if let Some(aligned) = sequence.as_aligned() {
            let rows = aligned.rows();
            if (aligned.start()..aligned.end()).contains(&position) {
                let cells = C::aligned_column(aligned, position).unwrap_or_default();
                if cells.len() != rows {
                    return Err(Error::MergeShape {
                        sequence: index,
                        expected: rows,
                        actual: cells.len(),
                    });
                }
                column.extend(cells);
            } else {
                column.extend(iter::repeat_n(gap, rows));
            }
        } else if (sequence.start()..sequence.end()).contains(&position) {
            column.push(C::from_qletter(sequence.at(position)));
        } else {
            column.push(gap);
        }
    }

    trace!("Merged {} cells at position {position}", column.len());
    Ok(column)
}

impl Alignment<Letter> {
    /// Creates an alignment of plain letters, see [`Alignment::with_config`].
    pub fn new(
        id: impl Into<String>,
        row_identifiers: &[&str],
        columns: Vec<Vec<Letter>>,
        alphabet: Arc<dyn Alphabet>,
        consensus: ConsenseFn,
    ) -> Result<Self> {
        Self::with_config(id, row_identifiers, columns, alphabet, consensus, ())
    }
}

impl Alignment<QLetter> {
    /// Creates an alignment of quality letters with the default threshold and filter, see [`Alignment::with_config`].
    pub fn new(
        id: impl Into<String>,
        row_identifiers: &[&str],
        columns: Vec<Vec<QLetter>>,
        alphabet: Arc<dyn Alphabet>,
        encoding: Encoding,
        consensus: ConsenseFn,
    ) -> Result<Self> {
        Self::with_config(
            id,
            row_identifiers,
            columns,
            alphabet,
            consensus,
            QualityConfig::new(encoding),
        )
    }

    pub fn quality_config(&self) -> &QualityConfig {
        &self.config
    }

    pub fn threshold(&self) -> Qphred {
        self.config.threshold
    }

    pub fn set_threshold(&mut self, threshold: Qphred) {
        self.config.threshold = threshold;
    }

    pub fn filter(&self) -> QFilter {
        self.config.filter
    }

    pub fn set_filter(&mut self, filter: QFilter) {
        self.config.filter = filter;
    }

    pub fn encoding(&self) -> Encoding {
        self.config.encoding
    }

    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.config.encoding = encoding;
    }
}

impl<C: Cell> Aligned for Alignment<C> {
    fn start(&self) -> isize {
        Alignment::start(self)
    }

    fn end(&self) -> isize {
        Alignment::end(self)
    }

    fn rows(&self) -> usize {
        Alignment::rows(self)
    }

    fn alphabet(&self) -> &dyn Alphabet {
        Alignment::alphabet(self)
    }

    fn column(&self, position: isize, fill: bool) -> Option<Cow<'_, [Letter]>> {
        Alignment::column(self, position, fill)
    }

    fn column_ql(&self, position: isize, fill: bool) -> Option<Cow<'_, [QLetter]>> {
        Alignment::column_ql(self, position, fill)
    }

    fn row_annotation(&self, row: usize) -> Annotation {
        self.sub_annotations
            .get(row)
            .cloned()
            .unwrap_or_else(|| Annotation::new(format!("{}:{row}", self.id())))
    }
}

/// Read as a single sequence, an alignment yields its consensus.
impl<C: Cell> Sequence for Alignment<C> {
    fn at(&self, position: isize) -> QLetter {
        (self.consensus)(self, self.alphabet.as_ref(), position, false)
    }

    fn len(&self) -> usize {
        Alignment::len(self)
    }

    fn start(&self) -> isize {
        Alignment::start(self)
    }

    fn copy_annotation(&self) -> Annotation {
        self.annotation.clone()
    }

    fn as_aligned(&self) -> Option<&dyn Aligned> {
        Some(self)
    }
}

impl<C: Cell> Display for Alignment<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.consensus(false))
    }
}
