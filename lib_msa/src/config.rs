use lib_seq::{
    Encoding, QFilter, Qphred,
    consensus::{DEFAULT_FILTER, DEFAULT_THRESHOLD},
};

#[cfg(test)]
mod tests;

/// Controls how quality alignments report letters.
#[derive(Debug, Clone, Copy)]
pub struct QualityConfig {
    /// Letters with a quality below this threshold are reported through the filter.
    pub threshold: Qphred,
    pub filter: QFilter,
    pub encoding: Encoding,
}

impl QualityConfig {
    pub fn new(encoding: Encoding) -> Self {
        Self {
            encoding,
            ..Default::default()
        }
    }
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            filter: DEFAULT_FILTER,
            encoding: Encoding::Sanger,
        }
    }
}
