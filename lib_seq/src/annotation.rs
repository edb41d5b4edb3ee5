use std::ops::Neg;

#[cfg(test)]
mod tests;

/// The orientation of a sequence.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strand {
    Forward,
    Reverse,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Topology {
    #[default]
    Linear,
    Circular,
}

/// Metadata of a sequence or of a single row of an alignment.
///
/// The offset places the first symbol of the sequence in global coordinates.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Annotation {
    pub id: String,
    pub description: String,
    pub offset: isize,
    pub strand: Strand,
    pub topology: Topology,
}

impl Neg for Strand {
    type Output = Self;

    /// Swaps forward and reverse. A strand of [`Strand::None`] stays unchanged.
    fn neg(self) -> Self::Output {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
            Self::None => Self::None,
        }
    }
}

impl Annotation {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_offset(mut self, offset: isize) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_strand(mut self, strand: Strand) -> Self {
        self.strand = strand;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
