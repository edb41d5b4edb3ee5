use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum Error {
    #[error("Alignment id/row count mismatch: {identifiers} row identifiers for {rows} rows.")]
    Construction { identifiers: usize, rows: usize },

    #[error("Column {column} does not match the row count: {actual} != {expected}.")]
    ColumnShape {
        column: usize,
        expected: usize,
        actual: usize,
    },

    #[error("The number of rows does not match the row count: {actual} != {expected}.")]
    RowCount { expected: usize, actual: usize },

    #[error(
        "Aligned sequence {sequence} contributed a column of {actual} cells but has {expected} rows."
    )]
    MergeShape {
        sequence: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Row {row} is out of range for an alignment of {rows} rows.")]
    RowOutOfRange { row: usize, rows: usize },

    #[error("Unsupported operation: {0}.")]
    UnsupportedOperation(&'static str),

    #[error("The alphabet '{alphabet}' does not provide the capability '{capability}'.")]
    UnsupportedCapability {
        alphabet: String,
        capability: &'static str,
    },
}
