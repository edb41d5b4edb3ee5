#![forbid(clippy::mod_module_files)]

//! Multiple sequence alignments stored column by column.
//!
//! An [`Alignment`] owns a block of cells and hands out borrowed [`Row`] and [`RowMut`] views.
//! The same container serves plain letters ([`AlignedSequence`]) and quality letters ([`QualityAlignedSequence`]).

pub mod alignment;
pub mod cell;
pub mod columns;
pub mod config;
pub mod error;

pub use alignment::{
    AlignedSequence, Alignment, QRow, QRowMut, QualityAlignedSequence, Row, RowMut,
};
pub use cell::Cell;
pub use columns::Columns;
pub use config::QualityConfig;
pub use error::{Error, Result};
