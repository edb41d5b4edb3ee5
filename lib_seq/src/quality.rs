use std::{
    fmt::{Display, Formatter, Result},
    iter,
};

use get_size2::GetSize;
use num_traits::clamp;

use crate::alphabet::Letter;


/// A phred-scaled quality score.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash, GetSize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Qphred(pub u8);

/// A letter paired with its quality score.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, GetSize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QLetter {
    pub letter: Letter,
    pub quality: Qphred,
}

/// The ASCII encoding of quality scores.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Encoding {
    /// Phred+33, scores 0 to 93.
    #[default]
    Sanger,
    /// Solexa+64, solexa-scaled scores -5 to 62.
    Solexa,
    /// Phred+64, scores 0 to 62.
    Illumina1_3,
    /// Phred+64, scores 3 to 62.
    Illumina1_5,
    /// Phred+33, scores 0 to 93.
    Illumina1_8,
}

impl Qphred {
    /// The quality assumed for letters that carry no quality information.
    pub const DEFAULT: Self = Self(40);
    pub const MAX: Self = Self(254);

    /// Converts the probability of a sequencing error into a quality score.
    ///
    /// A probability of zero saturates at [`Qphred::MAX`].
    pub fn from_error_probability(probability: f64) -> Self {
        let phred = -10.0 * probability.log10();
        Self(clamp(phred, 0.0, f64::from(Self::MAX.0)) as u8)
    }

    /// The probability of a sequencing error implied by this quality score.
    pub fn error_probability(self) -> f64 {
        10f64.powf(-f64::from(self.0) / 10.0)
    }

    /// Encodes this score as an ASCII byte.
    ///
    /// Scores outside the range of the encoding are clamped to it.
    pub fn encode(self, encoding: Encoding) -> u8 {
        match encoding {
            Encoding::Solexa => {
                let solexa = 10.0 * (10f64.powf(f64::from(self.0) / 10.0) - 1.0).log10();
                let solexa = clamp(solexa.round(), -5.0, 62.0) as i16;
                (solexa + i16::from(encoding.offset())) as u8
            }
            _ => {
                let (min, max) = encoding.range();
                self.0.clamp(min, max) + encoding.offset()
            }
        }
    }

    /// Decodes an ASCII byte into a score.
    pub fn decode(byte: u8, encoding: Encoding) -> Self {
        match encoding {
            Encoding::Solexa => {
                let solexa = f64::from(i16::from(byte) - i16::from(encoding.offset()));
                let phred = 10.0 * (10f64.powf(solexa / 10.0) + 1.0).log10();
                Self(clamp(phred.round(), 0.0, 62.0) as u8)
            }
            _ => Self(byte.saturating_sub(encoding.offset())),
        }
    }
}

impl Encoding {
    pub fn offset(self) -> u8 {
        match self {
            Self::Sanger | Self::Illumina1_8 => 33,
            Self::Solexa | Self::Illumina1_3 | Self::Illumina1_5 => 64,
        }
    }

    /// The range of phred scores this encoding can express.
    pub fn range(self) -> (u8, u8) {
        match self {
            Self::Sanger | Self::Illumina1_8 => (0, 93),
            Self::Solexa | Self::Illumina1_3 => (0, 62),
            Self::Illumina1_5 => (3, 62),
        }
    }
}

impl QLetter {
    pub fn new(letter: Letter, quality: Qphred) -> Self {
        Self { letter, quality }
    }

    /// Pairs `letter` with [`Qphred::DEFAULT`].
    pub fn with_default_quality(letter: Letter) -> Self {
        Self::new(letter, Qphred::DEFAULT)
    }

    /// Builds quality letters from parallel letter and encoded quality byte strings.
    ///
    /// Surplus bytes of the longer input are ignored.
    pub fn from_encoded(letters: &[u8], qualities: &[u8], encoding: Encoding) -> Vec<Self> {
        letters
            .iter()
            .zip(qualities)
            .map(|(&letter, &quality)| Self::new(Letter(letter), Qphred::decode(quality, encoding)))
            .collect()
    }

    pub fn repeat(self, amount: usize) -> Vec<Self> {
        iter::repeat_n(self, amount).collect()
    }
}

impl From<(u8, u8)> for QLetter {
    fn from((letter, quality): (u8, u8)) -> Self {
        Self::new(Letter(letter), Qphred(quality))
    }
}

impl Display for Qphred {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.0)
    }
}

impl Display for QLetter {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.letter)
    }
}
